pub mod settings;

pub use settings::{parse_switch, Directive, Settings, Switch, SETTINGS_FILE};
