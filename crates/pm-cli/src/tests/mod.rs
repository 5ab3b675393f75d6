mod cli;
mod handlers;
