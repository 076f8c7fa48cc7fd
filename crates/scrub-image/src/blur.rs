use image::DynamicImage;

const BOX_KERNEL: [f32; 9] = [1.0 / 9.0; 9];
const DEFAULT_SIGMA: f32 = 2.0;

/// Uniform blur applied to a whole image
pub trait Blur: Send + Sync {
    fn name(&self) -> &'static str;

    fn blur(&self, image: &DynamicImage) -> DynamicImage;
}

/// Gaussian blur with a fixed standard deviation
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GaussianBlur {
    pub sigma: f32,
}

impl GaussianBlur {
    pub fn new(sigma: f32) -> Self {
        Self { sigma }
    }

    /// Sigma handed to the kernel; NaN, infinite or non-positive values
    /// fall back to the default.
    pub fn effective_sigma(&self) -> f32 {
        if self.sigma.is_finite() && self.sigma > 0.0 {
            self.sigma
        } else {
            DEFAULT_SIGMA
        }
    }
}

impl Default for GaussianBlur {
    fn default() -> Self {
        Self {
            sigma: DEFAULT_SIGMA,
        }
    }
}

impl Blur for GaussianBlur {
    fn name(&self) -> &'static str {
        "gaussian"
    }

    fn blur(&self, image: &DynamicImage) -> DynamicImage {
        image.blur(self.effective_sigma())
    }
}

/// Repeated 3x3 box filter
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoxBlur {
    pub passes: u32,
}

impl BoxBlur {
    pub fn new(passes: u32) -> Self {
        Self { passes }
    }
}

impl Default for BoxBlur {
    fn default() -> Self {
        Self { passes: 3 }
    }
}

impl Blur for BoxBlur {
    fn name(&self) -> &'static str {
        "box"
    }

    fn blur(&self, image: &DynamicImage) -> DynamicImage {
        let mut blurred = image.clone();
        for _ in 0..self.passes {
            blurred = blurred.filter3x3(&BOX_KERNEL);
        }
        blurred
    }
}
