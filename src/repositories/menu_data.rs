use crate::models::{
    Catalog, CatalogResult, MenuCategory, MenuItem, OpeningHours, RestaurantInfo,
};

const MORNING_WINDOW: &str = "Fajar to Zuhr";

/// The Food Valley menu as served to the website
pub fn food_valley_catalog() -> CatalogResult<Catalog> {
    Catalog::new(vec![
        MenuCategory::new(
            "burgers",
            vec![
                MenuItem::new(
                    1,
                    "Chicken Burger",
                    "Juicy grilled chicken with fresh vegetables and special sauce",
                    "Rs. 350",
                    "/images/chicken-burger.jpg",
                    "burgers",
                ),
                MenuItem::new(
                    2,
                    "Beef Burger",
                    "Premium beef patty with cheese and crispy lettuce",
                    "Rs. 450",
                    "/images/beef-burger.jpg",
                    "burgers",
                ),
                MenuItem::new(
                    3,
                    "Zinger Burger",
                    "Spicy crispy chicken with hot sauce and fresh salad",
                    "Rs. 400",
                    "/images/zinger-burger.jpg",
                    "burgers",
                ),
                MenuItem::new(
                    4,
                    "Fish Burger",
                    "Fresh fish fillet with tartar sauce and vegetables",
                    "Rs. 380",
                    "/images/fish-burger.jpg",
                    "burgers",
                ),
            ],
        ),
        MenuCategory::new(
            "samosa",
            vec![
                MenuItem::new(
                    5,
                    "Chicken Samosa",
                    "Crispy triangular pastry filled with spiced chicken",
                    "Rs. 25",
                    "/images/chicken-samosa.jpg",
                    "samosa",
                ),
                MenuItem::new(
                    6,
                    "Beef Samosa",
                    "Traditional samosa with seasoned beef filling",
                    "Rs. 30",
                    "/images/beef-samosa.jpg",
                    "samosa",
                ),
                MenuItem::new(
                    7,
                    "Vegetable Samosa",
                    "Mixed vegetables with aromatic spices",
                    "Rs. 20",
                    "/images/veg-samosa.jpg",
                    "samosa",
                ),
                MenuItem::new(
                    8,
                    "Cheese Samosa",
                    "Crispy samosa filled with melted cheese",
                    "Rs. 35",
                    "/images/cheese-samosa.jpg",
                    "samosa",
                ),
            ],
        ),
        MenuCategory::new(
            "shawarma",
            vec![
                MenuItem::new(
                    9,
                    "Chicken Shawarma",
                    "Tender chicken wrapped in fresh naan with garlic sauce",
                    "Rs. 280",
                    "/images/chicken-shawarma.jpg",
                    "shawarma",
                ),
                MenuItem::new(
                    10,
                    "Beef Shawarma",
                    "Marinated beef with tahini sauce and fresh vegetables",
                    "Rs. 320",
                    "/images/beef-shawarma.jpg",
                    "shawarma",
                ),
                MenuItem::new(
                    11,
                    "Mixed Shawarma",
                    "Combination of chicken and beef with special sauce",
                    "Rs. 350",
                    "/images/mixed-shawarma.jpg",
                    "shawarma",
                ),
                MenuItem::new(
                    12,
                    "Falafel Shawarma",
                    "Crispy falafel with hummus and fresh salad",
                    "Rs. 250",
                    "/images/falafel-shawarma.jpg",
                    "shawarma",
                ),
            ],
        ),
        MenuCategory::new(
            "biryani",
            vec![
                MenuItem::new(
                    13,
                    "Chicken Biryani",
                    "Aromatic basmati rice with tender chicken and traditional spices",
                    "Rs. 450",
                    "/images/chicken-biryani.jpg",
                    "biryani",
                ),
                MenuItem::new(
                    14,
                    "Beef Biryani",
                    "Rich and flavorful beef biryani with saffron rice",
                    "Rs. 550",
                    "/images/beef-biryani.jpg",
                    "biryani",
                ),
                MenuItem::new(
                    15,
                    "Mutton Biryani",
                    "Premium mutton with fragrant basmati rice",
                    "Rs. 650",
                    "/images/mutton-biryani.jpg",
                    "biryani",
                ),
                MenuItem::new(
                    16,
                    "Vegetable Biryani",
                    "Mixed vegetables with aromatic rice and spices",
                    "Rs. 350",
                    "/images/veg-biryani.jpg",
                    "biryani",
                ),
            ],
        ),
        MenuCategory::new(
            "beverages",
            vec![
                MenuItem::new(
                    17,
                    "Fresh Dodh (Milk)",
                    "Fresh buffalo milk - Available from Fajar to Zuhr",
                    "Rs. 80",
                    "/images/fresh-milk.jpg",
                    "beverages",
                )
                .with_availability(MORNING_WINDOW),
                MenuItem::new(
                    18,
                    "Dahi (Yogurt)",
                    "Fresh homemade yogurt - Available from Fajar to Zuhr",
                    "Rs. 60",
                    "/images/dahi.jpg",
                    "beverages",
                )
                .with_availability(MORNING_WINDOW),
                MenuItem::new(
                    19,
                    "Lassi",
                    "Traditional sweet yogurt drink",
                    "Rs. 100",
                    "/images/lassi.jpg",
                    "beverages",
                ),
                MenuItem::new(
                    20,
                    "Fresh Juice",
                    "Seasonal fresh fruit juices",
                    "Rs. 120",
                    "/images/fresh-juice.jpg",
                    "beverages",
                ),
            ],
        ),
    ])
}

pub fn food_valley_info() -> RestaurantInfo {
    RestaurantInfo {
        name: "Food Valley".to_string(),
        address: "Food Valley, In front of SastaBazar, College Road, Layyah, Punjab, Pakistan"
            .to_string(),
        phones: vec!["0333-6203891".to_string(), "0305-2755060".to_string()],
        location: "Layyah, Punjab, Pakistan".to_string(),
        hours: OpeningHours {
            general: "Daily 8:00 AM - 11:00 PM".to_string(),
            special: "Dodh & Dahi available from Fajar to Zuhr only".to_string(),
        },
        services: vec![
            "Dine-in".to_string(),
            "Takeaway".to_string(),
            "Online Ordering".to_string(),
        ],
        note: "We don't offer home delivery. Please visit our restaurant or call for takeaway orders."
            .to_string(),
    }
}
