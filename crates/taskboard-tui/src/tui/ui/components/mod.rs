/*
[INPUT]:  Module declarations for reusable UI components.
[OUTPUT]: Public module exports for TUI component modules.
[POS]:    UI components module registry.
[UPDATE]: When adding popup or widget components.
*/
pub mod picker;
