#[derive(Debug, Clone, Copy)]
pub struct HueShift {
    pub source_min_deg: f32,
    pub source_max_deg: f32,
    pub dest_min_deg: f32,
    pub dest_max_deg: f32,
    pub min_saturation: f32,
}

impl HueShift {
    /// The rebrand mapping: green accents into a narrow teal/blue band.
    pub const fn green_to_teal() -> Self {
        HueShift {
            source_min_deg: 60.0,
            source_max_deg: 170.0,
            dest_min_deg: 185.0,
            dest_max_deg: 200.0,
            min_saturation: 0.15,
        }
    }

    /// Near-gray pixels stay put regardless of hue.
    pub fn selects(&self, hue_deg: f32, saturation: f32) -> bool {
        (self.source_min_deg..=self.source_max_deg).contains(&hue_deg)
            && saturation > self.min_saturation
    }

    /// Linear map from the source band onto the destination band.
    pub fn remap(&self, hue_deg: f32) -> f32 {
        let frac = (hue_deg - self.source_min_deg) / (self.source_max_deg - self.source_min_deg);
        self.dest_min_deg + frac * (self.dest_max_deg - self.dest_min_deg)
    }
}
