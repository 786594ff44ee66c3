pub mod makefile_templates;
