//! Animal roster.
//!
//! The bank is the full spawn pool; round targets are drawn from the
//! distinct category set.

/// Animal categories used as round targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    Mammals,
    Birds,
    Amphibians,
    Reptiles,
    Fish,
    Insects,
}

impl Category {
    pub const fn as_str(self) -> &'static str {
        match self {
            Category::Mammals => "Mammals",
            Category::Birds => "Birds",
            Category::Amphibians => "Amphibians",
            Category::Reptiles => "Reptiles",
            Category::Fish => "Fish",
            Category::Insects => "Insects",
        }
    }
}

/// Every distinct category, in bank order.
pub const CATEGORIES: [Category; 6] = [
    Category::Mammals,
    Category::Birds,
    Category::Amphibians,
    Category::Reptiles,
    Category::Fish,
    Category::Insects,
];

/// A spawnable animal.
#[derive(Debug, PartialEq, Eq)]
pub struct AnimalSpec {
    pub name: &'static str,
    pub category: Category,
    pub image: &'static str,
}

const fn animal(name: &'static str, category: Category, image: &'static str) -> AnimalSpec {
    AnimalSpec {
        name,
        category,
        image,
    }
}

pub const ANIMAL_BANK: [AnimalSpec; 18] = [
    animal("Lion", Category::Mammals, "assets/animals/lion.svg"),
    animal("Tiger", Category::Mammals, "assets/animals/tiger.svg"),
    animal("Panda", Category::Mammals, "assets/animals/panda.svg"),
    animal("Giraffe", Category::Mammals, "assets/animals/giraffe.svg"),
    animal("Kangaroo", Category::Mammals, "assets/animals/kangaroo.svg"),
    animal("Sloth", Category::Mammals, "assets/animals/sloth.svg"),
    animal("Dog", Category::Mammals, "assets/animals/dog.svg"),
    animal("Cat", Category::Mammals, "assets/animals/cat.svg"),
    animal("Cow", Category::Mammals, "assets/animals/cow.svg"),
    animal("Sheep", Category::Mammals, "assets/animals/sheep.svg"),
    animal("Penguin", Category::Birds, "assets/animals/penguin.svg"),
    animal("Parrot", Category::Birds, "assets/animals/parrot.svg"),
    animal("Owl", Category::Birds, "assets/animals/owl.svg"),
    animal("Frog", Category::Amphibians, "assets/animals/frog.svg"),
    animal("Turtle", Category::Reptiles, "assets/animals/turtle.svg"),
    animal("Snake", Category::Reptiles, "assets/animals/snake.svg"),
    animal("Shark", Category::Fish, "assets/animals/shark.svg"),
    animal("Butterfly", Category::Insects, "assets/animals/butterfly.svg"),
];

/// First bank entry of a category; handy for tests and the demo bot.
pub fn spec_for(category: Category) -> &'static AnimalSpec {
    ANIMAL_BANK
        .iter()
        .find(|spec| spec.category == category)
        .expect("every category has at least one animal")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_category_is_spawnable() {
        for category in CATEGORIES {
            assert!(ANIMAL_BANK.iter().any(|spec| spec.category == category));
        }
    }

    #[test]
    fn test_bank_has_no_duplicate_names() {
        for (i, a) in ANIMAL_BANK.iter().enumerate() {
            for b in &ANIMAL_BANK[i + 1..] {
                assert_ne!(a.name, b.name);
            }
        }
    }

    #[test]
    fn test_spec_for_matches_category() {
        assert_eq!(spec_for(Category::Birds).name, "Penguin");
        assert_eq!(spec_for(Category::Insects).name, "Butterfly");
    }
}
