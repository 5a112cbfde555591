mod line;
pub use line::{Line, LineReader};

mod field;
pub use field::Field;

mod segment;
pub use segment::{BEGIN_EVENT, END_EVENT, Segmenter, segment};
