mod failure;
mod output;
mod selection;
