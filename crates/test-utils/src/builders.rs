#![allow(dead_code)]

use ganttplan::config::{ConfigFile, RawConfigFile};
use ganttplan::plan::Task;
use ganttplan::types::RenderStyle;

/// Builder for task lists to simplify test setup.
#[derive(Debug, Default)]
pub struct PlanBuilder {
    tasks: Vec<Task>,
}

impl PlanBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn task(mut self, name: &str, duration: &str) -> Self {
        self.tasks.push(Task::new(name, duration));
        self
    }

    pub fn task_after(mut self, name: &str, duration: &str, dep: &str) -> Self {
        self.tasks.push(Task::new(name, duration).after(dep));
        self
    }

    pub fn with(mut self, task: Task) -> Self {
        self.tasks.push(task);
        self
    }

    /// Each task depends on the one before it.
    pub fn chain(mut self, steps: &[(&str, &str)]) -> Self {
        let mut prev: Option<&str> = None;
        for (name, duration) in steps {
            let task = Task::new(*name, *duration);
            self.tasks.push(match prev {
                Some(dep) => task.after(dep),
                None => task,
            });
            prev = Some(name);
        }
        self
    }

    pub fn build(self) -> Vec<Task> {
        self.tasks
    }
}

/// Builder for `ConfigFile`.
pub struct ConfigFileBuilder {
    config: RawConfigFile,
}

impl ConfigFileBuilder {
    pub fn new() -> Self {
        Self {
            config: RawConfigFile::default(),
        }
    }

    pub fn store_dir(mut self, dir: &str) -> Self {
        self.config.store.dir = dir.to_string();
        self
    }

    pub fn style(mut self, style: RenderStyle) -> Self {
        self.config.display.style = style;
        self
    }

    pub fn width(mut self, width: usize) -> Self {
        self.config.display.width = width;
        self
    }

    pub fn log_level(mut self, level: &str) -> Self {
        self.config.log.level = Some(level.to_string());
        self
    }

    pub fn build_raw(self) -> RawConfigFile {
        self.config
    }

    pub fn build(self) -> ConfigFile {
        ConfigFile::try_from(self.config).expect("Failed to build valid config from builder")
    }
}

impl Default for ConfigFileBuilder {
    fn default() -> Self {
        Self::new()
    }
}
