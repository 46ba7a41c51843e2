//! The built-in mock catalog.

use chrono::NaiveDate;

use crate::catalog::{Category, Product, Review, Testimonial};
use crate::ids::{ProductId, ReviewId, TestimonialId};
use crate::money::Money;

const IMG_WATCH: &str = "https://images.unsplash.com/photo-1704961212944-524f56df23fa?w=1080";
const IMG_HANDBAG: &str = "https://images.unsplash.com/photo-1601924928357-22d3b3abfcfb?w=1080";
const IMG_FRAGRANCE: &str = "https://images.unsplash.com/photo-1615160460367-dcccd27e11ad?w=1080";
const IMG_FOOTWEAR: &str = "https://images.unsplash.com/photo-1625622176700-e55445383b85?w=1080";
const IMG_JEWELRY: &str = "https://images.unsplash.com/photo-1515562141207-7a88fb7ce338?w=1080";
const IMG_SUNGLASSES: &str = "https://images.unsplash.com/photo-1762706334838-ea8425b43116?w=1080";
const IMG_CLUTCH: &str = "https://images.unsplash.com/photo-1569388330292-79cc1ec67270?w=1080";
const IMG_CHRONO: &str = "https://images.unsplash.com/photo-1523170335258-f5ed11844a49?w=800";

pub(crate) fn categories() -> Vec<Category> {
    vec![
        Category::new("1", "Watches", IMG_WATCH, 45),
        Category::new("2", "Handbags", IMG_HANDBAG, 38),
        Category::new("3", "Fragrances", IMG_FRAGRANCE, 52),
        Category::new("4", "Footwear", IMG_FOOTWEAR, 67),
        Category::new("5", "Jewelry", IMG_JEWELRY, 41),
        Category::new("6", "Sunglasses", IMG_SUNGLASSES, 29),
    ]
}

pub(crate) fn products() -> Vec<Product> {
    vec![
        Product::new("1", "Classic Leather Watch", "Elegance", "Watches", Money::usd(29999))
            .with_original_price(Money::usd(39999))
            .with_rating(4.8, 124)
            .with_description(
                "Timeless elegance meets modern craftsmanship in this classic leather watch. \
                 Perfect for both formal and casual occasions.",
            )
            .with_image(IMG_WATCH)
            .with_images([
                IMG_WATCH,
                "https://images.unsplash.com/photo-1523170335258-f5ed11844a49?w=800",
                "https://images.unsplash.com/photo-1524805444758-089113d48a6d?w=800",
            ])
            .with_spec("Case Material", "Stainless Steel")
            .with_spec("Band Material", "Genuine Leather")
            .with_spec("Water Resistance", "50m")
            .with_spec("Movement", "Quartz")
            .with_spec("Warranty", "2 Years")
            .with_colors(["Black", "Brown", "Tan"])
            .with_stock(true, Some(45))
            .featured(),
        Product::new("2", "Designer Shoulder Bag", "Luxora", "Handbags", Money::usd(54999))
            .with_rating(4.9, 89)
            .with_description(
                "Elevate your style with this premium designer shoulder bag, \
                 crafted from the finest materials.",
            )
            .with_image(IMG_HANDBAG)
            .with_images([IMG_HANDBAG])
            .with_spec("Material", "Premium Leather")
            .with_spec("Dimensions", "12\" x 8\" x 4\"")
            .with_spec("Closure", "Magnetic Snap")
            .with_spec("Strap", "Adjustable")
            .with_colors(["Beige", "Black", "Navy"])
            .with_stock(true, Some(23))
            .featured(),
        Product::new("3", "Luxury Eau de Parfum", "Essence", "Fragrances", Money::usd(18999))
            .with_original_price(Money::usd(24999))
            .with_rating(4.7, 156)
            .with_description(
                "An intoxicating blend of floral and woody notes that captures \
                 sophistication and allure.",
            )
            .with_image(IMG_FRAGRANCE)
            .with_images([IMG_FRAGRANCE])
            .with_spec("Volume", "100ml")
            .with_spec("Type", "Eau de Parfum")
            .with_spec("Notes", "Rose, Sandalwood, Vanilla")
            .with_spec("Longevity", "8-10 hours")
            .with_sizes(["50ml", "100ml", "150ml"])
            .with_stock(true, Some(67))
            .featured()
            .new_arrival(),
        Product::new("4", "Premium Leather Sneakers", "StepLux", "Footwear", Money::usd(32999))
            .with_rating(4.6, 203)
            .with_description(
                "Comfort meets luxury in these handcrafted leather sneakers, \
                 perfect for the modern lifestyle.",
            )
            .with_image(IMG_FOOTWEAR)
            .with_images([IMG_FOOTWEAR])
            .with_spec("Upper Material", "Premium Leather")
            .with_spec("Sole", "Rubber")
            .with_spec("Lining", "Breathable Mesh")
            .with_spec("Closure", "Lace-up")
            .with_sizes(["7", "8", "9", "10", "11", "12"])
            .with_colors(["White", "Black", "Gray"])
            .with_stock(true, Some(89))
            .featured(),
        Product::new("5", "Diamond Tennis Bracelet", "Brilliance", "Jewelry", Money::usd(129999))
            .with_original_price(Money::usd(159999))
            .with_rating(5.0, 67)
            .with_description(
                "Stunning diamond tennis bracelet featuring brilliant-cut stones \
                 in a classic setting.",
            )
            .with_image(IMG_JEWELRY)
            .with_images([IMG_JEWELRY])
            .with_spec("Metal", "18K White Gold")
            .with_spec("Diamonds", "2.5 Carats")
            .with_spec("Length", "7 inches")
            .with_spec("Clarity", "VS1")
            .with_spec("Color", "F")
            .with_stock(true, Some(12))
            .featured(),
        Product::new("6", "Aviator Sunglasses", "Vista", "Sunglasses", Money::usd(24999))
            .with_rating(4.5, 98)
            .with_description(
                "Classic aviator design with polarized lenses and premium metal frames.",
            )
            .with_image(IMG_SUNGLASSES)
            .with_images([IMG_SUNGLASSES])
            .with_spec("Lens Material", "Polarized Glass")
            .with_spec("Frame Material", "Titanium")
            .with_spec("UV Protection", "100%")
            .with_spec("Lens Width", "58mm")
            .with_colors(["Gold/Brown", "Silver/Gray", "Black/Green"])
            .with_stock(true, Some(34))
            .new_arrival(),
        Product::new("7", "Silk Evening Clutch", "Luxora", "Handbags", Money::usd(19999))
            .with_rating(4.7, 45)
            .with_description(
                "Elegant silk clutch perfect for evening events and special occasions.",
            )
            .with_image(IMG_CLUTCH)
            .with_images([IMG_CLUTCH])
            .with_spec("Material", "Pure Silk")
            .with_spec("Dimensions", "9\" x 5\" x 2\"")
            .with_spec("Closure", "Magnetic")
            .with_spec("Chain", "Detachable Gold Chain")
            .with_colors(["Champagne", "Navy", "Rose Gold", "Black"])
            .with_stock(true, Some(18)),
        Product::new("8", "Chronograph Sports Watch", "Elegance", "Watches", Money::usd(79999))
            .with_original_price(Money::usd(99999))
            .with_rating(4.9, 178)
            .with_description(
                "Professional-grade chronograph with premium materials and precision movement.",
            )
            .with_image(IMG_CHRONO)
            .with_images([IMG_CHRONO])
            .with_spec("Case Material", "Titanium")
            .with_spec("Band Material", "Stainless Steel")
            .with_spec("Water Resistance", "200m")
            .with_spec("Movement", "Automatic")
            .with_spec("Warranty", "5 Years")
            .with_colors(["Silver", "Black", "Blue"])
            .with_stock(true, Some(29))
            .new_arrival(),
    ]
}

pub(crate) fn testimonials() -> Vec<Testimonial> {
    let quote = |id: &str, name: &str, role: &str, content: &str, image: &str| Testimonial {
        id: TestimonialId::new(id),
        name: name.to_string(),
        role: role.to_string(),
        content: content.to_string(),
        rating: 5,
        image: image.to_string(),
    };

    vec![
        quote(
            "1",
            "Sarah Johnson",
            "Fashion Blogger",
            "Absolutely love the quality and elegance of the products. The shopping \
             experience was seamless and the customer service was exceptional!",
            "https://i.pravatar.cc/150?img=1",
        ),
        quote(
            "2",
            "Michael Chen",
            "Business Executive",
            "Premium quality products at reasonable prices. My watch arrived perfectly \
             packaged and looks even better in person.",
            "https://i.pravatar.cc/150?img=12",
        ),
        quote(
            "3",
            "Emily Rodriguez",
            "Style Enthusiast",
            "The attention to detail and craftsmanship is unmatched. I've recommended \
             this store to all my friends!",
            "https://i.pravatar.cc/150?img=5",
        ),
    ]
}

pub(crate) fn reviews() -> Vec<Review> {
    let review = |id: &str, product: &str, user: &str, rating: u8, comment: &str, day: u32| Review {
        id: ReviewId::new(id),
        product_id: ProductId::new(product),
        user_name: user.to_string(),
        rating,
        comment: comment.to_string(),
        date: NaiveDate::from_ymd_opt(2026, 1, day).unwrap_or_default(),
    };

    vec![
        review(
            "r1",
            "1",
            "James Wilson",
            5,
            "Excellent watch! The leather strap is incredibly comfortable and the design \
             is timeless.",
            10,
        ),
        review(
            "r2",
            "1",
            "Lisa Anderson",
            4,
            "Beautiful watch, great value for money. Only minor issue is the strap took \
             a few days to break in.",
            8,
        ),
        review(
            "r3",
            "2",
            "Amanda Foster",
            5,
            "This bag exceeded my expectations! The leather quality is superb and it \
             fits all my essentials.",
            12,
        ),
    ]
}
