mod concurrency;
mod layering;
