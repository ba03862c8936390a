//! The business record rendered by the page. Everything here is fixed at
//! compile time; the page never mutates or fetches any of it.

pub struct Service {
    pub name: &'static str,
    pub price: &'static str,
    pub description: &'static str,
    pub img: &'static str,
}

pub struct Hours {
    pub weekdays: &'static str,
    pub saturday: &'static str,
    pub sunday: &'static str,
}

pub struct Testimonial {
    pub name: &'static str,
    pub text: &'static str,
    pub rating: u8,
    pub image: &'static str,
}

pub struct ShopData {
    pub name: &'static str,
    pub category: &'static str,
    pub location: &'static str,
    pub address: &'static str,
    pub phone: &'static str,
    pub hours: Hours,
    pub services: &'static [Service],
    pub gallery: &'static [&'static str],
    pub testimonials: &'static [Testimonial],
}

pub const SHOP: ShopData = ShopData {
    name: "Push Fitness",
    category: "Gym",
    location: "Albany, NY",
    address: "Albany, NY",
    phone: "+15184230155",
    hours: Hours {
        weekdays: "Not specified",
        saturday: "Not specified",
        sunday: "Not specified",
    },
    services: &[
        Service {
            name: "Gym Membership",
            price: "Contact for pricing",
            description: "Access to state-of-the-art fitness equipment",
            img: "https://images.unsplash.com/photo-1534438327276-14e5300c3a48?q=80&w=1000&auto=format&fit=crop",
        },
        Service {
            name: "Personal Training",
            price: "Contact for pricing",
            description: "One-on-one training sessions",
            img: "https://images.unsplash.com/photo-1571019613454-1cb2f99b2d8b?q=80&w=1000&auto=format&fit=crop",
        },
        Service {
            name: "Group Classes",
            price: "Contact for pricing",
            description: "Various fitness classes for all levels",
            img: "https://images.unsplash.com/photo-1518611012118-696072aa579a?q=80&w=1000&auto=format&fit=crop",
        },
        Service {
            name: "Fitness Assessment",
            price: "Contact for pricing",
            description: "Comprehensive fitness evaluation",
            img: "https://images.unsplash.com/photo-1571019614242-c5c5dee9f50b?q=80&w=1000&auto=format&fit=crop",
        },
    ],
    gallery: &[
        "Gym Membership",
        "Personal Training",
        "Group Classes",
        "Fitness Assessment",
    ],
    testimonials: &[
        Testimonial {
            name: "Member 1",
            text: "Great facility and supportive environment!",
            rating: 5,
            image: "M1",
        },
        Testimonial {
            name: "Member 2",
            text: "Best gym in Albany!",
            rating: 5,
            image: "M2",
        },
        Testimonial {
            name: "Member 3",
            text: "Amazing community and results!",
            rating: 5,
            image: "M3",
        },
    ],
};

/// In-page anchors addressable through the navigation, in page order.
pub const SECTION_ANCHORS: &[&str] = &["home", "about", "services", "gallery", "contact"];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn four_services_with_images() {
        assert_eq!(SHOP.services.len(), 4);
        for service in SHOP.services {
            assert!(service.img.starts_with("https://"));
            assert_eq!(service.price, "Contact for pricing");
        }
    }

    #[test]
    fn gallery_mirrors_service_names() {
        assert_eq!(SHOP.gallery.len(), 4);
        let names: Vec<&str> = SHOP.services.iter().map(|s| s.name).collect();
        assert_eq!(SHOP.gallery, names.as_slice());
    }

    #[test]
    fn contact_details_are_fixed() {
        assert_eq!(SHOP.name, "Push Fitness");
        assert_eq!(SHOP.category, "Gym");
        assert_eq!(SHOP.phone, "+15184230155");
        assert_eq!(SHOP.location, "Albany, NY");
        assert_eq!(SHOP.address, "Albany, NY");
        assert_eq!(SHOP.hours.weekdays, "Not specified");
        assert_eq!(SHOP.hours.saturday, "Not specified");
        assert_eq!(SHOP.hours.sunday, "Not specified");
    }

    #[test]
    fn three_five_star_testimonials() {
        assert_eq!(SHOP.testimonials.len(), 3);
        for testimonial in SHOP.testimonials {
            assert_eq!(testimonial.rating, 5);
            assert!(!testimonial.text.is_empty());
        }
    }

    #[test]
    fn anchor_order_matches_page_order() {
        assert_eq!(
            SECTION_ANCHORS,
            &["home", "about", "services", "gallery", "contact"]
        );
    }
}
