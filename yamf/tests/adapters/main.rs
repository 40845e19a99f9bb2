mod array;
mod module;
