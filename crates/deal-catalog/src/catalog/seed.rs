//! The fixed sample catalog.

use crate::catalog::{Catalog, Deal};

/// The seeded catalog for a session.
///
/// Every call builds an equal value.
pub fn initialize() -> Catalog {
    // Ids are literal and distinct.
    Catalog::from_deals(sample_deals()).unwrap_or_default()
}

fn sample_deals() -> Vec<Deal> {
    vec![
        Deal::new("1", "Amazing Smart TV Deal", "Amazon", "Electronics", 399.99)
            .with_description(
                "Get a 55-inch 4K Smart TV at an unbeatable price.  Perfect for movie nights!",
            )
            .with_original_price(799.99)
            .with_image("https://placehold.co/600x400/EEE/31343C?text=Smart+TV")
            .with_counts(125, 32)
            .with_link("https://www.amazon.co.uk")
            .with_end_date("2024-07-30")
            .popular(),
        Deal::new("2", "Super Comfy Sofa - 50% Off", "DFS", "Home & Furniture", 299.0)
            .with_description(
                "Upgrade your living room with this super comfy sofa.  Limited time offer!",
            )
            .with_original_price(599.0)
            .with_image("https://placehold.co/600x400/EEE/31343C?text=Sofa")
            .with_counts(88, 15)
            .with_link("https://www.dfs.co.uk")
            .with_end_date("2024-07-28"),
        Deal::new("3", "Free Coffee at Starbucks", "Starbucks", "Food & Drink", 0.0)
            .with_description(
                "Get a free coffee at Starbucks with any pastry purchase.  Today only!",
            )
            .with_image("https://placehold.co/600x400/EEE/31343C?text=Coffee")
            .with_counts(210, 55)
            .with_link("https://www.starbucks.co.uk")
            .popular(),
        Deal::new(
            "4",
            "Latest Gaming Laptop - 20% Off",
            "Currys PC World",
            "Electronics",
            1199.0,
        )
        .with_description("Experience the ultimate gaming with this high-performance laptop.")
        .with_original_price(1499.0)
        .with_image("https://placehold.co/600x400/EEE/31343C?text=Gaming+Laptop")
        .with_counts(95, 28)
        .with_link("https://www.currys.co.uk"),
        Deal::new("5", "Designer Dress Sale - Up to 70% Off", "ASOS", "Fashion", 49.99)
            .with_description(
                "Huge discounts on a wide selection of designer dresses.  Don't miss out!",
            )
            .with_original_price(169.99)
            .with_image("https://placehold.co/600x400/EEE/3134C?text=Dress")
            .with_counts(142, 41)
            .with_link("https://www.asos.com")
            .with_end_date("2024-08-05"),
        Deal::new("6", "Buy One Get One Free on Pizzas", "Pizza Hut", "Food & Drink", 12.99)
            .with_description(
                "Get a free pizza when you buy one at full price.  Available for delivery and collection.",
            )
            .with_image("https://placehold.co/600x400/EEE/31343C?text=Pizza")
            .with_counts(180, 62)
            .with_link("https://www.pizzahut.co.uk")
            .with_end_date("2024-07-29")
            .popular(),
        Deal::new("7", "Weekend Getaway - 30% Off", "Booking.com", "Travel", 199.0)
            .with_description(
                "Enjoy a relaxing weekend getaway with a 30% discount on all bookings.",
            )
            .with_original_price(285.0)
            .with_image("https://placehold.co/600x400/EEE/31343C?text=Travel")
            .with_counts(75, 20)
            .with_link("https://www.booking.com"),
        Deal::new("8", "New Running Shoes - 25% Off", "Nike", "Sports & Outdoors", 74.99)
            .with_description(
                "Get the latest running shoes with advanced cushioning and support.",
            )
            .with_original_price(99.99)
            .with_image("https://placehold.co/600x400/EEE/31343C?text=Shoes")
            .with_counts(110, 35)
            .with_link("https://www.nike.com")
            .with_end_date("2024-08-01"),
    ]
}
