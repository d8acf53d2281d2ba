use rand::{Rng, distr::StandardUniform, prelude::Distribution};

/// An RGB triple as handed to renderers in draw commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// A tile colour from the game palette.
///
/// Leaves carry exactly one of these; subdivided blocks carry none. The
/// palette is fixed at four colours, so any colour a goal can name is one a
/// random board can actually contain.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum Colour {
    /// Deep blue.
    #[default]
    PacificPoint = 0,
    /// Warm red.
    RealRed = 1,
    /// Muted green.
    OldOlive = 2,
    /// Soft yellow.
    DaffodilDelight = 3,
}

impl Distribution<Colour> for StandardUniform {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Colour {
        match rng.random_range(0..=3) {
            0 => Colour::PacificPoint,
            1 => Colour::RealRed,
            2 => Colour::OldOlive,
            _ => Colour::DaffodilDelight,
        }
    }
}

impl Colour {
    /// Number of palette colours (4).
    pub const LEN: usize = 4;

    /// Every palette colour in declaration order.
    pub const ALL: [Colour; Colour::LEN] = [
        Colour::PacificPoint,
        Colour::RealRed,
        Colour::OldOlive,
        Colour::DaffodilDelight,
    ];

    /// RGB value a renderer should use for this colour.
    #[must_use]
    pub const fn rgb(self) -> Rgb {
        match self {
            Colour::PacificPoint => Rgb::new(1, 128, 181),
            Colour::RealRed => Rgb::new(199, 44, 58),
            Colour::OldOlive => Rgb::new(138, 151, 71),
            Colour::DaffodilDelight => Rgb::new(255, 211, 92),
        }
    }

    /// Human-readable name for goal descriptions and the score panel.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Colour::PacificPoint => "Pacific Point",
            Colour::RealRed => "Real Red",
            Colour::OldOlive => "Old Olive",
            Colour::DaffodilDelight => "Daffodil Delight",
        }
    }
}
