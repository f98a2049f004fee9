use rand::Rng;

use crate::food::models::{Minerals, NutritionRecord, Vitamins};

/// Inclusive bounds for one synthesized field.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldRange {
    pub min: f64,
    pub max: f64,
}

impl FieldRange {
    const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }

    fn sample<R: Rng>(&self, rng: &mut R, decimals: i32) -> f64 {
        let scale = 10f64.powi(decimals);
        let value = rng.gen_range(self.min..=self.max);
        ((value * scale).round() / scale).clamp(self.min, self.max)
    }
}

/// Per-field ranges for placeholder records. These are display ranges, not
/// dietary reference values.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SynthesisRanges {
    pub calories: FieldRange,
    pub protein: FieldRange,
    pub carbs: FieldRange,
    pub fat: FieldRange,
    pub fiber: FieldRange,
    pub vitamin_a: FieldRange,
    pub vitamin_c: FieldRange,
    pub vitamin_d: FieldRange,
    pub vitamin_e: FieldRange,
    pub calcium: FieldRange,
    pub iron: FieldRange,
    pub potassium: FieldRange,
}

pub const SYNTHESIS_RANGES: SynthesisRanges = SynthesisRanges {
    calories: FieldRange::new(150.0, 450.0),
    protein: FieldRange::new(5.0, 30.0),
    carbs: FieldRange::new(10.0, 60.0),
    fat: FieldRange::new(2.0, 20.0),
    fiber: FieldRange::new(0.0, 8.0),
    vitamin_a: FieldRange::new(0.0, 800.0),
    vitamin_c: FieldRange::new(0.0, 60.0),
    vitamin_d: FieldRange::new(0.0, 5.0),
    vitamin_e: FieldRange::new(0.0, 5.0),
    calcium: FieldRange::new(10.0, 250.0),
    iron: FieldRange::new(0.5, 8.0),
    potassium: FieldRange::new(100.0, 600.0),
};

impl SynthesisRanges {
    pub fn contains(&self, record: &NutritionRecord) -> bool {
        self.calories.contains(record.calories)
            && self.protein.contains(record.protein)
            && self.carbs.contains(record.carbs)
            && self.fat.contains(record.fat)
            && self.fiber.contains(record.fiber)
            && self.vitamin_a.contains(record.vitamins.vitamin_a)
            && self.vitamin_c.contains(record.vitamins.vitamin_c)
            && self.vitamin_d.contains(record.vitamins.vitamin_d)
            && self.vitamin_e.contains(record.vitamins.vitamin_e)
            && self.calcium.contains(record.minerals.calcium)
            && self.iron.contains(record.minerals.iron)
            && self.potassium.contains(record.minerals.potassium)
    }

    /// Draws every field independently. Calories are whole numbers, the rest
    /// carry one decimal.
    pub fn synthesize<R: Rng>(&self, rng: &mut R) -> NutritionRecord {
        NutritionRecord {
            calories: self.calories.sample(rng, 0),
            protein: self.protein.sample(rng, 1),
            carbs: self.carbs.sample(rng, 1),
            fat: self.fat.sample(rng, 1),
            fiber: self.fiber.sample(rng, 1),
            vitamins: Vitamins {
                vitamin_a: self.vitamin_a.sample(rng, 1),
                vitamin_c: self.vitamin_c.sample(rng, 1),
                vitamin_d: self.vitamin_d.sample(rng, 1),
                vitamin_e: self.vitamin_e.sample(rng, 1),
            },
            minerals: Minerals {
                calcium: self.calcium.sample(rng, 1),
                iron: self.iron.sample(rng, 1),
                potassium: self.potassium.sample(rng, 1),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_synthesized_records_stay_in_range() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..500 {
            let record = SYNTHESIS_RANGES.synthesize(&mut rng);
            assert!(SYNTHESIS_RANGES.contains(&record), "{:?}", record);
            assert!(record.is_valid());
            assert_eq!(record.calories.fract(), 0.0);
        }
    }

    #[test]
    fn test_same_seed_same_record() {
        let a = SYNTHESIS_RANGES.synthesize(&mut StdRng::seed_from_u64(42));
        let b = SYNTHESIS_RANGES.synthesize(&mut StdRng::seed_from_u64(42));
        assert_eq!(a, b);
    }
}
