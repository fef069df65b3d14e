mod memory;
mod sql;
