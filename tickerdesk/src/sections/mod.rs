mod market;
mod news;
mod snapshot;
