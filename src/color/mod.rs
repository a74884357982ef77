mod convert;

pub use convert::hsv2rgb;
use smart_leds::{RGB8, hsv::Hsv as HSV};

pub type Rgb = RGB8;
pub type Hsv = HSV;
