mod get_cv;

pub use get_cv::*;
