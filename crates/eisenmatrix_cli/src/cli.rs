use clap::{Args, Parser, Subcommand};
use eisenmatrix_core::{ConfigOverrides, Quadrant};

/// Four-quadrant task board
#[derive(Parser, Debug)]
#[command(name = "eisenmatrix", author, version, about, long_about = None)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalArgs,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Args, Debug, Default)]
pub struct GlobalArgs {
    /// Path to the board database (overrides EISENMATRIX_DB_PATH)
    #[arg(long, global = true)]
    pub db: Option<String>,

    /// Locale tag such as `ru_RU` or `zh-CN` (overrides EISENMATRIX_LOCALE)
    #[arg(long, global = true)]
    pub locale: Option<String>,

    /// Absolute log directory (overrides EISENMATRIX_LOG_DIR)
    #[arg(long, global = true)]
    pub log_dir: Option<String>,

    /// trace|debug|info|warn|error (overrides EISENMATRIX_LOG_LEVEL)
    #[arg(long, global = true)]
    pub log_level: Option<String>,
}

impl GlobalArgs {
    pub fn overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            db_path: self.db.clone(),
            log_dir: self.log_dir.clone(),
            log_level: self.log_level.clone(),
            locale: self.locale.clone(),
        }
    }
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show all four quadrants
    List {
        /// Hide completed tasks
        #[arg(long)]
        hide_completed: bool,
    },
    /// Add a task to a quadrant
    Add {
        #[arg(value_name = "QUADRANT")]
        quadrant: Quadrant,
        #[arg(value_name = "TEXT", num_args = 1.., required = true)]
        text: Vec<String>,
    },
    /// Toggle a task's completion
    Done {
        #[arg(value_name = "TASK_ID")]
        id: String,
    },
    /// Replace a task's text
    Edit {
        #[arg(value_name = "TASK_ID")]
        id: String,
        #[arg(value_name = "TEXT", num_args = 1.., required = true)]
        text: Vec<String>,
    },
    /// Delete a task
    Delete {
        #[arg(value_name = "TASK_ID")]
        id: String,
    },
    /// Move a task to another quadrant
    Move {
        #[arg(value_name = "TASK_ID")]
        id: String,
        #[arg(value_name = "QUADRANT")]
        quadrant: Quadrant,
    },
    /// Drop a task onto a quadrant or another task
    Drag {
        #[arg(value_name = "TASK_ID")]
        id: String,
        /// Quadrant id or task id to drop onto; omit to cancel the drag
        #[arg(long, value_name = "TARGET")]
        over: Option<String>,
    },
    /// Print the localized UI strings
    Strings,
}
