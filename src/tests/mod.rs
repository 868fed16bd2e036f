mod commands;
mod fields;
mod instruction;
mod status;
