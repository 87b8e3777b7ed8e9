// src/extract/prompt.rs
//! Few-shot prompt for the attribute-extraction model call.
//!
//! The examples pin the reply shape to a single JSON object with `category`,
//! `calories`, `time`, `keywords`, and `keywords_name`. Temperature is held
//! at zero by the provider, so the examples do most of the steering.

pub const SYSTEM_PROMPT: &str = "You are an assistant that extracts recipe attributes from user \
input. If the input contains an uncommon or unrecognized category, add relevant general keywords \
based on common culinary types, such as 'beverages' for drinks, 'dessert' for sweets, etc.";

const EXAMPLES: &str = r#"From the given text, identify:
- **category**: The main name or type of the recipe (like "chicken", "ice cream").
- **calories**: Number of calories, if mentioned.
- **time**: Time to cook, in minutes.
- **keywords**: Important words related to the recipe. If the category is not common (like "noodles" or "biryani"), include relevant characteristics (e.g., "asian", "main course", "stir fry", "quick meal", "wheat based", "high protein", etc).
- **keywords_name**: List of individual words from the category/name. For uncommon categories, include descriptive terms and related categories (e.g., for "noodles": ["asian", "pasta", "wheat", "main dish"]).

Examples:
---
Input: "noodles"
Output: {
    "category": "",
    "calories": "",
    "time": "",
    "keywords": ["asian", "stir fry", "wheat based", "quick meal", "main course", "pasta", "noodles"],
    "keywords_name": ["asian", "pasta", "main dish", "wheat"]
}

---
Input: "biryani"
Output: {
    "category": "",
    "calories": "",
    "time": "",
    "keywords": ["rice", "indian", "spicy", "main course", "one dish meal", "biryani"],
    "keywords_name": ["rice", "indian", "spicy"]
}

---
Input: "quinoa salad"
Output: {
    "category": "salad dressings",
    "calories": "",
    "time": "",
    "keywords": ["healthy", "salad", "gluten-free", "fiber", "low calorie", "vegan"],
    "keywords_name": ["healthy", "salad", "vegan"]
}

---
Input: "beef tacos"
Output: {
    "category": "beef organ meats",
    "calories": "",
    "time": "",
    "keywords": ["mexican", "beef", "spicy", "snack", "tortilla", "street food"],
    "keywords_name": ["mexican", "beef", "snack"]
}

---
Input: "smoothie bowl"
Output: {
    "category": "smoothies",
    "calories": "",
    "time": "",
    "keywords": ["breakfast", "healthy", "fruits", "smoothies", "vegan", "fiber"],
    "keywords_name": ["breakfast", "healthy", "fruits"]
}

---
Input: "spaghetti bolognese"
Output: {
    "category": "spaghetti",
    "calories": "",
    "time": "",
    "keywords": ["italian", "pasta", "meat", "tomato", "main course", "hearty"],
    "keywords_name": ["italian", "pasta", "meat"]
}

---
Input: "I wish to cook chicken soup which contains around 200 calories within 30 mins"
Output: {
    "category": "chicken",
    "calories": "200",
    "time": "30",
    "keywords": ["chicken", "soup", "200 calories", "30 mins"],
    "keywords_name": ["chicken", "soup"]
}

---
Input: "Quick pasta recipe with 500 calories, ready in 20 mins"
Output: {
    "category": "pasta shells",
    "calories": "500",
    "time": "20",
    "keywords": ["pasta shells", "500 calories", "20 mins"],
    "keywords_name": ["pasta shells"]
}

---
Input: "can you suggest something with low calories"
Output: {
    "category": "",
    "calories": "",
    "time": "",
    "keywords": ["low calories"],
    "keywords_name": ["low", "calories"]
}

---
Input: "looking for a vegetarian recipe"
Output: {
    "category": "",
    "calories": "",
    "time": "",
    "keywords": ["vegetarian", "vegan"],
    "keywords_name": ["vegetarian"]
}

---
Input: "need something gluten free"
Output: {
    "category": "",
    "calories": "",
    "time": "",
    "keywords": ["gluten free"],
    "keywords_name": ["gluten", "free"]
}

---
Input: "something with low carbs"
Output: {
    "category": "very low carbs",
    "calories": "",
    "time": "",
    "keywords": ["very low carbs", "low carbs", "carbs"],
    "keywords_name": ["low", "carbs"]
}

---
Input: "i wish to cook something in 30 minutes"
Output: {
    "category": "",
    "calories": "",
    "time": "30",
    "keywords": ["30 minutes", "quick meal"],
    "keywords_name": [""]
}

---
Input: "I wish to make fish and stew"
Output: {
    "category": "stew",
    "calories": "",
    "time": "",
    "keywords": ["fish", "stew", "high protein"],
    "keywords_name": ["fish", "stew"]
}

---
Input: "give some recipes involving almonds or dry fruits"
Output: {
    "category": "",
    "calories": "",
    "time": "",
    "keywords": ["almonds", "dry fruits"],
    "keywords_name": ["almonds", "dry fruits"]
}

---
Input: "something involving nuts"
Output: {
    "category": "nuts",
    "calories": "",
    "time": "",
    "keywords": ["nuts", "snack", "healthy", "protein", "fiber"],
    "keywords_name": ["nuts", "snack", "healthy"]
}
"#;

/// Full user-role prompt for one extraction request.
pub fn build_user_prompt(text: &str) -> String {
    format!("{EXAMPLES}\n---\nNow process this input:\nInput: \"{text}\"\nOutput:\n")
}
