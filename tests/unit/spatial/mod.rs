mod coord;
mod target;
