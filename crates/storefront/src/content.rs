//! Static site content: the product catalog and page copy.
//!
//! Everything here is fixed reference data built once at startup and shared
//! read-only through [`AppState`](crate::state::AppState).

use border3d_core::{PortfolioItemId, Price, Product, ProductId, ReviewId};

/// Banner text repeated across the announcement bar.
pub const ANNOUNCEMENT: &str = "Free shipping on all products over $50";

/// A navigation link to a section anchor.
#[derive(Debug, Clone)]
pub struct NavLink {
    pub name: &'static str,
    pub href: &'static str,
}

/// A "What We Create" service category.
#[derive(Debug, Clone)]
pub struct ServiceCategory {
    pub title: &'static str,
    pub description: &'static str,
    pub image: &'static str,
}

/// A finished piece shown in the portfolio gallery. Not purchasable.
#[derive(Debug, Clone)]
pub struct PortfolioItem {
    pub id: PortfolioItemId,
    pub name: &'static str,
    pub price: Price,
    pub image: &'static str,
    pub category: &'static str,
}

/// One step of the "How It Works" walkthrough.
#[derive(Debug, Clone)]
pub struct ProcessStep {
    /// Icon name, rendered as a CSS class.
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

/// A customer testimonial.
#[derive(Debug, Clone)]
pub struct Review {
    pub id: ReviewId,
    pub name: &'static str,
    /// Headline shown under the name (product and date, or a short summary).
    pub headline: &'static str,
    /// Star rating, 1-5.
    pub rating: u8,
    pub text: &'static str,
}

/// A frequently asked question.
#[derive(Debug, Clone)]
pub struct Faq {
    pub question: &'static str,
    pub answer: &'static str,
}

/// All catalog data and page copy.
#[derive(Debug, Clone)]
pub struct Catalog {
    pub nav_links: Vec<NavLink>,
    pub categories: Vec<ServiceCategory>,
    pub products: Vec<Product>,
    pub portfolio: Vec<PortfolioItem>,
    pub steps: Vec<ProcessStep>,
    pub reviews: Vec<Review>,
    pub faqs: Vec<Faq>,
    pub footer_quick_links: Vec<NavLink>,
    pub footer_support_links: Vec<&'static str>,
}

impl Catalog {
    /// Look up a purchasable product by ID.
    #[must_use]
    pub fn product(&self, id: ProductId) -> Option<&Product> {
        self.products.iter().find(|product| product.id == id)
    }

    /// The Border3D catalog.
    #[must_use]
    pub fn border3d() -> Self {
        Self {
            nav_links: vec![
                NavLink { name: "Home", href: "#home" },
                NavLink { name: "Shop", href: "#shop" },
                NavLink { name: "Services", href: "#services" },
                NavLink { name: "Portfolio", href: "#portfolio" },
                NavLink { name: "About", href: "#about" },
                NavLink { name: "Contact", href: "#contact" },
            ],
            categories: vec![
                ServiceCategory {
                    title: "Miniatures",
                    description: "Ultra-detailed resin miniatures for tabletop and collectors.",
                    image: "/static/images/category-miniatures.svg",
                },
                ServiceCategory {
                    title: "Cosplay Prints",
                    description: "Helmets, armor parts, and props printed in durable materials.",
                    image: "/static/images/category-cosplay.svg",
                },
                ServiceCategory {
                    title: "Custom Builds",
                    description: "One-of-a-kind prints, terrain, gifts, and specialty models.",
                    image: "/static/images/category-custom.svg",
                },
            ],
            products: vec![
                Product::new(
                    ProductId::new(1),
                    "Dwarf Kingsguard - Sons of Ymir",
                    Price::usd_cents(225),
                    "/static/images/product-dwarf-kingsguard.svg",
                    "Miniatures",
                ),
                Product::new(
                    ProductId::new(2),
                    "Dwarf Veterans Unit",
                    Price::usd_cents(225),
                    "/static/images/product-dwarf-veteran.svg",
                    "Miniatures",
                ),
                Product::new(
                    ProductId::new(3),
                    "The Winged Hussar",
                    Price::usd_cents(800),
                    "/static/images/product-hussar.svg",
                    "Miniatures",
                ),
                Product::new(
                    ProductId::new(4),
                    "Skeleton Spearmen Command",
                    Price::usd_cents(1000),
                    "/static/images/product-skeleton.svg",
                    "Miniatures",
                ),
            ],
            portfolio: vec![
                PortfolioItem {
                    id: PortfolioItemId::new(1),
                    name: "Cosplay Helmet - Geoffro Edition",
                    price: Price::usd_cents(14_000),
                    image: "/static/images/portfolio-helmet.svg",
                    category: "Cosplay",
                },
                PortfolioItem {
                    id: PortfolioItemId::new(2),
                    name: "Sci-Fi Plasma Rifle",
                    price: Price::usd_cents(8_500),
                    image: "/static/images/portfolio-weapon.svg",
                    category: "Props",
                },
                PortfolioItem {
                    id: PortfolioItemId::new(3),
                    name: "Fantasy Dragon Bust",
                    price: Price::usd_cents(12_000),
                    image: "/static/images/portfolio-dragon.svg",
                    category: "Sculpture",
                },
                PortfolioItem {
                    id: PortfolioItemId::new(4),
                    name: "Ornate Fantasy Sword",
                    price: Price::usd_cents(9_500),
                    image: "/static/images/portfolio-sword.svg",
                    category: "Props",
                },
            ],
            steps: vec![
                ProcessStep {
                    icon: "upload",
                    title: "Send Your Idea",
                    description: "Upload your STL or describe your idea.",
                },
                ProcessStep {
                    icon: "message",
                    title: "We Quote It",
                    description: "You get a clear, fast quote based on size & material.",
                },
                ProcessStep {
                    icon: "printer",
                    title: "We Print",
                    description: "Precision resin or durable filament prints.",
                },
                ProcessStep {
                    icon: "truck",
                    title: "We Ship",
                    description: "Fast shipping from Texas with tracking.",
                },
            ],
            reviews: vec![
                Review {
                    id: ReviewId::new(1),
                    name: "Customer",
                    headline: "Deluxe Cosplay Armor 11/05/2021",
                    rating: 5,
                    text: "I was super happy with my print yet again! They will require very \
                           minimal clean up prior to paint. Thanks again and this is one happy \
                           customer.",
                },
                Review {
                    id: ReviewId::new(2),
                    name: "Aleks",
                    headline: "Fast delivery",
                    rating: 5,
                    text: "Fast delivery and quality was as expected. Packed with attention and \
                           care. Will use this shop again!",
                },
                Review {
                    id: ReviewId::new(3),
                    name: "Aaron",
                    headline: "Excellent experience",
                    rating: 5,
                    text: "Excellent prices, quality, and communication from this seller! I \
                           highly recommend to all those looking to build a massive skeleton \
                           horde.",
                },
            ],
            faqs: vec![
                Faq {
                    question: "What file formats do you accept?",
                    answer: "We accept STL, OBJ, and 3MF file formats. If you have a different \
                             format, contact us and we'll help you convert it.",
                },
                Faq {
                    question: "How long does shipping take?",
                    answer: "Most orders ship within 3-5 business days. Shipping time varies by \
                             location, typically 3-7 business days within the US.",
                },
                Faq {
                    question: "What materials do you use?",
                    answer: "We use high-quality resin for detailed miniatures and durable \
                             PLA/PETG filament for larger props and cosplay items.",
                },
                Faq {
                    question: "Do you offer custom designs?",
                    answer: "Yes! We can work with your designs or help create custom models. \
                             Use our quote request form to get started.",
                },
            ],
            footer_quick_links: vec![
                NavLink { name: "Shop", href: "#shop" },
                NavLink { name: "Services", href: "#services" },
                NavLink { name: "Portfolio", href: "#portfolio" },
                NavLink { name: "About Us", href: "#about" },
                NavLink { name: "Contact", href: "#contact" },
            ],
            footer_support_links: vec![
                "Shipping Policy",
                "Refund Policy",
                "Privacy Policy",
                "Terms of Service",
            ],
        }
    }
}
