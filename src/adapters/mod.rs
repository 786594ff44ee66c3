pub mod assets;
pub mod template;
pub mod terminal_prompter;
pub mod workspace_filesystem;
