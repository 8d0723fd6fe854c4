use crate::{GridError, GridResult, HasTasks};

/// Estimates how tall an expanded card renders, without measuring it.
///
/// The expanded height is a step function of the task count:
///
/// ```text
/// expanded_base + n * per_task(n) + long_description_bonus? + chrome, capped at max_height
/// ```
///
/// where `per_task(n)` grows with `n` so that cards with many tasks get proportionally more room.
/// The defaults reproduce the dashboard's tuned constants; they approximate one font and theme and
/// are expected to be overridden for others.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct HeightPolicy {
    pub expanded_base: u32,
    /// Largest task count that uses `few_tasks_step`.
    pub few_tasks_max: usize,
    pub few_tasks_step: u32,
    /// Largest task count that uses `some_tasks_step`.
    pub some_tasks_max: usize,
    pub some_tasks_step: u32,
    pub many_tasks_step: u32,
    /// A description longer than this many UTF-16 code units earns `long_description_bonus`.
    ///
    /// Counting code units keeps estimates identical to a browser measuring `String.length`.
    pub long_description_chars: usize,
    pub long_description_bonus: u32,
    /// Room for the card's buttons and icons.
    pub chrome: u32,
    pub max_height: u32,
}

impl Default for HeightPolicy {
    fn default() -> Self {
        Self {
            expanded_base: 420,
            few_tasks_max: 3,
            few_tasks_step: 55,
            some_tasks_max: 6,
            some_tasks_step: 60,
            many_tasks_step: 65,
            long_description_chars: 80,
            long_description_bonus: 120,
            chrome: 80,
            max_height: 900,
        }
    }
}

impl HeightPolicy {
    pub fn validate(&self) -> GridResult<()> {
        if self.max_height == 0 {
            return Err(GridError::height_policy("max_height must be greater than 0"));
        }
        if self.some_tasks_max < self.few_tasks_max {
            return Err(GridError::height_policy(
                "some_tasks_max must not be below few_tasks_max",
            ));
        }
        Ok(())
    }

    pub fn per_task_step(&self, task_count: usize) -> u32 {
        if task_count <= self.few_tasks_max {
            self.few_tasks_step
        } else if task_count <= self.some_tasks_max {
            self.some_tasks_step
        } else {
            self.many_tasks_step
        }
    }

    /// Expanded height for a card with `task_count` tasks.
    pub fn expanded_height(&self, task_count: usize, has_long_description: bool) -> u32 {
        let count = u32::try_from(task_count).unwrap_or(u32::MAX);
        let mut height = self
            .expanded_base
            .saturating_add(count.saturating_mul(self.per_task_step(task_count)));
        if has_long_description {
            height = height.saturating_add(self.long_description_bonus);
        }
        height = height.saturating_add(self.chrome);
        if height > self.max_height {
            vdebug!(
                task_count,
                estimated = height,
                capped = self.max_height,
                "expanded card height capped"
            );
        }
        height.min(self.max_height)
    }

    pub fn is_long_description(&self, description: &str) -> bool {
        description.encode_utf16().count() > self.long_description_chars
    }

    /// Height for one card. Collapsed cards are always `base_item_height`.
    pub fn item_height<T: HasTasks + ?Sized>(
        &self,
        item: &T,
        expanded: bool,
        base_item_height: u32,
    ) -> u32 {
        if !expanded {
            return base_item_height;
        }
        let has_long = item
            .task_descriptions()
            .any(|d| self.is_long_description(d));
        self.expanded_height(item.task_count(), has_long)
    }
}
