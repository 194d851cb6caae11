// ============================================================
// CSV INFRASTRUCTURE LAYER
// ============================================================
// Headerless capture parsing and delimiter detection

mod frame_reader;

pub use frame_reader::FrameReader;
