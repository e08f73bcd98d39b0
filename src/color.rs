use crate::foundation::{
    core::{Phase, Rgb8},
    error::{SundriftError, SundriftResult},
};

pub trait Lerp: Sized {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self;
}

impl Lerp for f64 {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        a + (b - a) * t
    }
}

impl Lerp for Rgb8 {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        fn lerp_u8(a: u8, b: u8, t: f64) -> u8 {
            let a = f64::from(a);
            let b = f64::from(b);
            (a + (b - a) * t).round().clamp(0.0, 255.0) as u8
        }

        Self {
            r: lerp_u8(a.r, b.r, t),
            g: lerp_u8(a.g, b.g, t),
            b: lerp_u8(a.b, b.b, t),
        }
    }
}

/// An ordered keyframe table whose keys sit at equal phase intervals
/// `0, 1/(N-1), .., 1`.
#[derive(Clone, Debug)]
pub struct KeyTrack<T> {
    keys: Vec<T>,
}

impl<T> KeyTrack<T>
where
    T: Lerp + Clone,
{
    pub fn new(keys: Vec<T>) -> SundriftResult<Self> {
        if keys.len() < 2 {
            return Err(SundriftError::animation(
                "KeyTrack must have at least two keys",
            ));
        }
        Ok(Self { keys })
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        false // new() requires >= 2 keys
    }

    pub fn key(&self, index: usize) -> &T {
        &self.keys[index]
    }

    /// Linear interpolation between the two keys bracketing `phase`.
    ///
    /// `sample(0)` is exactly the first key and `sample(1)` exactly the
    /// last: the bracket index is clamped to the final segment, so the
    /// endpoints hit `t = 0` and `t = 1` rather than rounding artifacts.
    pub fn sample(&self, phase: Phase) -> T {
        let n = self.keys.len();
        let position = phase.value() * (n - 1) as f64;
        let lower = (position.floor() as usize).min(n - 2);
        let upper = lower + 1;
        let t = position - lower as f64;
        T::lerp(&self.keys[lower], &self.keys[upper], t)
    }
}
