mod evaluate;
mod read;
