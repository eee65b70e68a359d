use colorful::{core::color_string::CString, Colorful, RGB};
use colors_transform::{Color, Rgb};
use std::fmt::Display;

#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum CertifyColor {
    PrimaryResource,
    FmtOKBackground,
    FmtERRORBackground,
    FmtLISTBackground,
}

impl CertifyColor {
    pub fn value(&self) -> &str {
        match self {
            CertifyColor::PrimaryResource => "#ff9800",
            CertifyColor::FmtOKBackground => "#A8C97D",
            CertifyColor::FmtERRORBackground => "#FF0000",
            CertifyColor::FmtLISTBackground => "#0DCAF0",
        }
    }

    pub fn color(&self) -> RGB {
        // every value above is a valid hex color, black is never reached
        let rgb = Rgb::from_hex_str(self.value()).unwrap_or_else(|_| Rgb::from(0.0, 0.0, 0.0));

        RGB::new(
            rgb.get_red() as u8,
            rgb.get_green() as u8,
            rgb.get_blue() as u8,
        )
    }
}

pub fn color_primary(input: impl Display) -> CString {
    input
        .to_string()
        .color(CertifyColor::PrimaryResource.color())
}
