pub(crate) const HELP_ID: char = 'h';
pub(crate) const HELP_NAME: &str = "help";
pub(crate) const HELP_MESSAGE: &str = "Shows this help";
