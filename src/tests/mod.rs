mod frontend;
mod seed;
mod todos;
