use std::fs;
use std::path::Path;
use std::sync::LazyLock;

use serde::{Deserialize, Serialize};
use strsim::jaro_winkler;
use tracing::debug;

use crate::error::{FuelError, Result};
use crate::models::{MealRecord, MealSlot};
use crate::planner::constants::FUZZY_MATCH_THRESHOLD;

/// Meals available to the selector, partitioned by slot.
///
/// Order within a slot matters: the first record is the fallback when nothing
/// is within tolerance, and earlier records win ties.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MealCatalog {
    pub breakfast: Vec<MealRecord>,
    pub pre_workout: Vec<MealRecord>,
    pub post_workout: Vec<MealRecord>,
    pub dinner: Vec<MealRecord>,
    pub snacks: Vec<MealRecord>,
}

/// A fuzzy search hit.
#[derive(Debug, Clone, Copy)]
pub struct MealMatch<'a> {
    pub slot: MealSlot,
    pub meal: &'a MealRecord,
    pub score: f64,
}

impl MealCatalog {
    /// The built-in catalog.
    pub fn builtin() -> &'static MealCatalog {
        &BUILTIN_CATALOG
    }

    /// Records for one slot.
    pub fn slot(&self, slot: MealSlot) -> &[MealRecord] {
        match slot {
            MealSlot::Breakfast => &self.breakfast,
            MealSlot::PreWorkout => &self.pre_workout,
            MealSlot::PostWorkout => &self.post_workout,
            MealSlot::Dinner => &self.dinner,
            MealSlot::Snack => &self.snacks,
        }
    }

    /// Every slot must offer at least one meal.
    pub fn validate(&self) -> Result<()> {
        for slot in MealSlot::ALL {
            if self.slot(slot).is_empty() {
                return Err(FuelError::EmptyCatalog(slot));
            }
        }
        Ok(())
    }

    /// Total number of records across all slots.
    pub fn len(&self) -> usize {
        MealSlot::ALL.iter().map(|s| self.slot(*s).len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Find a meal by exact name (case-insensitive).
    pub fn find(&self, name: &str) -> Option<(MealSlot, &MealRecord)> {
        let key = name.trim().to_lowercase();
        MealSlot::ALL.into_iter().find_map(|slot| {
            self.slot(slot)
                .iter()
                .find(|m| m.key() == key)
                .map(|m| (slot, m))
        })
    }

    /// Meals whose names are close to `query`, best first.
    pub fn search(&self, query: &str) -> Vec<MealMatch<'_>> {
        let query = query.trim().to_lowercase();

        let mut matches: Vec<MealMatch> = MealSlot::ALL
            .into_iter()
            .flat_map(|slot| self.slot(slot).iter().map(move |meal| (slot, meal)))
            .map(|(slot, meal)| MealMatch {
                slot,
                meal,
                score: jaro_winkler(&meal.key(), &query),
            })
            .filter(|m| m.score > FUZZY_MATCH_THRESHOLD)
            .collect();

        matches.sort_by(|a, b| {
            b.score
                .partial_cmp(&a.score)
                .unwrap_or(std::cmp::Ordering::Equal)
        });
        matches
    }

    /// Find a meal by exact name, erroring when it does not exist.
    pub fn get(&self, name: &str) -> Result<(MealSlot, &MealRecord)> {
        self.find(name)
            .ok_or_else(|| FuelError::MealNotFound(name.to_string()))
    }
}

/// Load a replacement catalog from a JSON file.
pub fn load_catalog<P: AsRef<Path>>(path: P) -> Result<MealCatalog> {
    let content = fs::read_to_string(path.as_ref())?;
    let catalog: MealCatalog = serde_json::from_str(&content)?;
    catalog.validate()?;
    debug!(
        path = %path.as_ref().display(),
        meals = catalog.len(),
        "Loaded meal catalog"
    );
    Ok(catalog)
}

static BUILTIN_CATALOG: LazyLock<MealCatalog> = LazyLock::new(|| MealCatalog {
    breakfast: vec![
        MealRecord::new(
            "Oatmeal Power Bowl",
            35,
            85,
            22,
            650,
            &[
                "1 cup oats (cooked)",
                "1 scoop vanilla protein powder",
                "1 banana, sliced",
                "2 tbsp almond butter",
                "1 tbsp honey",
                "Cinnamon to taste",
            ],
        ),
        MealRecord::new(
            "Greek Yogurt Parfait",
            40,
            60,
            15,
            525,
            &[
                "2 cups Greek yogurt",
                "1 cup granola",
                "1 cup mixed berries",
                "2 tbsp honey",
                "1/4 cup walnuts",
            ],
        ),
        MealRecord::new(
            "Egg White Scramble",
            45,
            50,
            18,
            530,
            &[
                "8 egg whites",
                "2 whole eggs",
                "1 cup spinach",
                "1/2 cup mushrooms",
                "2 slices whole wheat toast",
                "1 tbsp olive oil",
            ],
        ),
        MealRecord::new(
            "Protein Pancakes",
            42,
            75,
            16,
            600,
            &[
                "1.5 cups pancake mix",
                "2 scoops protein powder",
                "2 eggs",
                "1/4 cup blueberries",
                "2 tbsp maple syrup",
            ],
        ),
        MealRecord::new(
            "Breakfast Burrito",
            38,
            70,
            24,
            640,
            &[
                "3 eggs",
                "1/4 cup black beans",
                "1 large tortilla",
                "1/4 cup cheese",
                "1/2 avocado",
                "Salsa",
            ],
        ),
    ],
    pre_workout: vec![
        MealRecord::new(
            "Quick Energy Boost",
            8,
            35,
            11,
            250,
            &["1 medium apple", "2 tbsp peanut butter", "1 rice cake"],
        ),
        MealRecord::new(
            "Banana Smoothie",
            15,
            45,
            6,
            290,
            &[
                "1 banana",
                "1 scoop whey protein",
                "1 cup almond milk",
                "1 tbsp honey",
            ],
        ),
        MealRecord::new(
            "Energy Bar & Fruit",
            10,
            40,
            8,
            260,
            &["1 protein bar", "1 medium orange"],
        ),
        MealRecord::new(
            "Toast & Berries",
            12,
            42,
            7,
            270,
            &[
                "2 slices whole wheat bread",
                "1 tbsp almond butter",
                "1/2 cup blueberries",
            ],
        ),
    ],
    post_workout: vec![
        MealRecord::new(
            "Chicken & Rice Recovery",
            62,
            75,
            18,
            750,
            &[
                "8 oz grilled chicken breast",
                "1.5 cups white rice",
                "1 cup steamed broccoli",
                "1 tbsp olive oil",
            ],
        ),
        MealRecord::new(
            "Protein Shake + Rice",
            55,
            80,
            12,
            680,
            &[
                "2 scoops whey protein",
                "2 cups chocolate milk",
                "1 banana",
                "1 cup cooked rice",
            ],
        ),
        MealRecord::new(
            "Turkey & Sweet Potato",
            58,
            70,
            16,
            700,
            &[
                "8 oz ground turkey",
                "1 large sweet potato",
                "1 cup green beans",
                "1 tbsp coconut oil",
            ],
        ),
        MealRecord::new(
            "Salmon & Quinoa",
            50,
            65,
            22,
            720,
            &[
                "6 oz salmon",
                "1.5 cups quinoa",
                "1 cup asparagus",
                "Lemon & herbs",
            ],
        ),
    ],
    dinner: vec![
        MealRecord::new(
            "Salmon with Sweet Potato",
            45,
            55,
            28,
            700,
            &[
                "6 oz grilled salmon",
                "1 large sweet potato",
                "2 cups mixed greens salad",
                "2 tbsp avocado oil dressing",
            ],
        ),
        MealRecord::new(
            "Lean Beef & Vegetables",
            52,
            45,
            25,
            680,
            &[
                "7 oz lean beef",
                "1 cup brown rice",
                "2 cups mixed vegetables",
                "1 tbsp olive oil",
            ],
        ),
        MealRecord::new(
            "Chicken Stir-Fry",
            48,
            60,
            20,
            680,
            &[
                "7 oz chicken breast",
                "2 cups mixed vegetables",
                "1 cup rice noodles",
                "Stir-fry sauce",
            ],
        ),
        MealRecord::new(
            "Shrimp & Pasta",
            42,
            70,
            18,
            650,
            &[
                "6 oz shrimp",
                "1.5 cups whole wheat pasta",
                "1/2 cup marinara sauce",
                "2 cups spinach",
                "Parmesan cheese",
            ],
        ),
        MealRecord::new(
            "Turkey Meatballs",
            50,
            58,
            22,
            690,
            &[
                "8 oz turkey meatballs",
                "1.5 cups pasta",
                "1/2 cup tomato sauce",
                "Side salad",
            ],
        ),
    ],
    snacks: vec![
        MealRecord::new(
            "Protein Shake",
            25,
            8,
            3,
            160,
            &["1 scoop whey protein", "1 cup water"],
        ),
        MealRecord::new(
            "Greek Yogurt & Berries",
            20,
            25,
            5,
            225,
            &["1 cup Greek yogurt", "1/2 cup mixed berries"],
        ),
        MealRecord::new(
            "Trail Mix",
            8,
            28,
            18,
            290,
            &[
                "1/4 cup almonds",
                "1/4 cup dried fruit",
                "1 tbsp dark chocolate chips",
            ],
        ),
    ],
});

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_builtin_catalog_shape() {
        let catalog = MealCatalog::builtin();
        assert!(catalog.validate().is_ok());
        assert_eq!(catalog.slot(MealSlot::Breakfast).len(), 5);
        assert_eq!(catalog.slot(MealSlot::PreWorkout).len(), 4);
        assert_eq!(catalog.slot(MealSlot::PostWorkout).len(), 4);
        assert_eq!(catalog.slot(MealSlot::Dinner).len(), 5);
        assert_eq!(catalog.slot(MealSlot::Snack).len(), 3);
        assert_eq!(catalog.len(), 21);
    }

    #[test]
    fn test_find_case_insensitive() {
        let catalog = MealCatalog::builtin();
        let (slot, meal) = catalog.find("trail mix").unwrap();
        assert_eq!(slot, MealSlot::Snack);
        assert_eq!(meal.calories, 290);
        assert!(catalog.find("pizza").is_none());
        assert!(matches!(
            catalog.get("pizza"),
            Err(FuelError::MealNotFound(_))
        ));
    }

    #[test]
    fn test_search_fuzzy() {
        let catalog = MealCatalog::builtin();
        let hits = catalog.search("protien pancakes");
        assert!(!hits.is_empty());
        assert_eq!(hits[0].meal.name, "Protein Pancakes");
        assert_eq!(hits[0].slot, MealSlot::Breakfast);

        assert!(catalog.search("xyzzy").is_empty());
    }

    #[test]
    fn test_load_catalog_rejects_empty_slot() {
        let mut catalog = MealCatalog::builtin().clone();
        catalog.snacks.clear();
        let json = serde_json::to_string(&catalog).unwrap();

        let mut file = NamedTempFile::new().unwrap();
        file.write_all(json.as_bytes()).unwrap();

        assert!(matches!(
            load_catalog(file.path()),
            Err(FuelError::EmptyCatalog(MealSlot::Snack))
        ));
    }

    #[test]
    fn test_load_catalog_from_file() {
        let json = serde_json::to_string(MealCatalog::builtin()).unwrap();
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(json.as_bytes()).unwrap();

        let loaded = load_catalog(file.path()).unwrap();
        assert_eq!(&loaded, MealCatalog::builtin());
    }
}
