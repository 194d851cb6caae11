// ============================================================
// JSON INFRASTRUCTURE LAYER
// ============================================================
// Serialization of frame datasets to the viewer's JSON format

mod frame_writer;

pub use frame_writer::FrameWriter;
