use crate::controllers::viewer::data::frame_data::FrameData;

/// Receives finished frames for display.
pub trait FrameSink {
    fn present(&mut self, frame: FrameData);
}
