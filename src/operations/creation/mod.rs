mod make_rectangle;
mod make_segment;

pub use make_rectangle::MakeRectangle;
pub use make_segment::MakeSegment;
