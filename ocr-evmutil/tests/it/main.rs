mod common;

mod tracker;
