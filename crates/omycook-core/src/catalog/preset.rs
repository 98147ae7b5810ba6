//! Built-in catalogs.
//!
//! Both lists are fixed; nothing in the application mutates them.

use std::collections::BTreeMap;

use super::model::{Cuisine, Recipe, TrendingRecipe};

const KIMCHI_FRIED_RICE_IMAGE: &str = "https://images.unsplash.com/photo-1647093953000-9065ed6f85ef?w=1080";
const STIR_FRY_IMAGE: &str = "https://images.unsplash.com/photo-1599297915779-0dadbd376d49?w=1080";
const ROLLED_OMELETTE_IMAGE: &str = "https://images.unsplash.com/photo-1617735605078-8a9336be0816?w=1080";
const KIMCHI_STEW_IMAGE: &str = "https://images.unsplash.com/photo-1760228865341-675704c22a5b?w=1080";
const CREAM_PASTA_IMAGE: &str = "https://images.unsplash.com/photo-1588013273468-315fd88ea34c?w=1080";
const RAMEN_IMAGE: &str = "https://images.unsplash.com/photo-1697652974652-a2336106043b?w=1080";
const BIBIMBAP_IMAGE: &str = "https://images.unsplash.com/photo-1590301157890-4810ed352733?w=1080";

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn substitutes(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

/// Recipes shown on the recommendation screen.
pub fn recommended_recipes() -> Vec<Recipe> {
    vec![
        Recipe {
            id: "1".to_string(),
            name: "김치볶음밥".to_string(),
            image_url: KIMCHI_FRIED_RICE_IMAGE.to_string(),
            time: 15,
            difficulty: 1,
            spicy_level: 2,
            servings: 1,
            calories: 420,
            cuisine: Cuisine::Korean,
            available_ingredients: strings(&["김치", "밥", "계란", "참기름"]),
            missing_ingredients: Vec::new(),
            substitutes: BTreeMap::new(),
        },
        Recipe {
            id: "2".to_string(),
            name: "돼지고기 야채볶음".to_string(),
            image_url: STIR_FRY_IMAGE.to_string(),
            time: 25,
            difficulty: 2,
            spicy_level: 1,
            servings: 2,
            calories: 380,
            cuisine: Cuisine::Korean,
            available_ingredients: strings(&["돼지고기", "양파", "당근"]),
            missing_ingredients: strings(&["파프리카"]),
            substitutes: substitutes(&[("파프리카", "피망 또는 생략")]),
        },
        Recipe {
            id: "3".to_string(),
            name: "계란말이".to_string(),
            image_url: ROLLED_OMELETTE_IMAGE.to_string(),
            time: 10,
            difficulty: 1,
            spicy_level: 0,
            servings: 1,
            calories: 220,
            cuisine: Cuisine::Korean,
            available_ingredients: strings(&["계란", "당근"]),
            missing_ingredients: strings(&["대파"]),
            substitutes: substitutes(&[("대파", "냉동 파 또는 양파")]),
        },
    ]
}

/// The trending board, ordered by rank.
pub fn trending_recipes() -> Vec<TrendingRecipe> {
    let entry = |rank: u32,
                 name: &str,
                 image_url: &str,
                 views: u64,
                 likes: u64,
                 time: u32,
                 servings: u32,
                 cuisine: Cuisine,
                 badge: Option<&str>| TrendingRecipe {
        id: rank.to_string(),
        rank,
        name: name.to_string(),
        image_url: image_url.to_string(),
        views,
        likes,
        time,
        servings,
        cuisine,
        badge: badge.map(str::to_string),
    };

    vec![
        entry(1, "김치찌개", KIMCHI_STEW_IMAGE, 15234, 3421, 30, 2, Cuisine::Korean, Some("이번 주 1위")),
        entry(2, "크림 파스타", CREAM_PASTA_IMAGE, 12890, 2876, 25, 2, Cuisine::Western, Some("급상승")),
        entry(3, "라멘", RAMEN_IMAGE, 11234, 2543, 20, 1, Cuisine::Japanese, Some("인기")),
        entry(4, "김치볶음밥", KIMCHI_FRIED_RICE_IMAGE, 9876, 2134, 15, 1, Cuisine::Korean, None),
        entry(5, "야채볶음", STIR_FRY_IMAGE, 8765, 1987, 20, 2, Cuisine::Korean, None),
        entry(6, "비빔밥", BIBIMBAP_IMAGE, 7654, 1765, 25, 1, Cuisine::Korean, None),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recommended_recipes_in_range() {
        let recipes = recommended_recipes();
        assert_eq!(recipes.len(), 3);
        for recipe in &recipes {
            assert!((1..=3).contains(&recipe.difficulty));
            assert!(recipe.spicy_level <= 5);
            for missing in &recipe.missing_ingredients {
                assert!(recipe.substitutes.contains_key(missing));
            }
        }
    }

    #[test]
    fn test_trending_is_ranked() {
        let board = trending_recipes();
        assert_eq!(board.len(), 6);
        for (i, entry) in board.iter().enumerate() {
            assert_eq!(entry.rank as usize, i + 1);
        }
        assert!(board.windows(2).all(|w| w[0].views >= w[1].views));
    }
}
