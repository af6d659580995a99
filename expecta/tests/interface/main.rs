mod accumulator;
mod clonable_mock;
mod connection;
mod mutex;
mod no_default;
mod on_call;
mod stack;
mod times;
