mod trace;

pub use trace::create_trace;
