mod array;
mod option;
