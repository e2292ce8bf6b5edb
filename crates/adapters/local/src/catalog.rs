//! Static service catalog bundled with the binary.

use std::future::Future;

use servicebay_app::ports::CatalogRepository;
use servicebay_domain::catalog::{Provider, ServiceListing};
use servicebay_domain::error::ServiceBayError;
use servicebay_domain::id::ListingId;
use servicebay_domain::price::Price;

const MORNING: &str = "10:00 AM - 1:00 PM";
const EVENING: &str = "2:00 PM - 8:00 PM";

struct Seed {
    id: &'static str,
    title: &'static str,
    image: &'static str,
    rating: f32,
    rupees: u64,
    description: &'static str,
    provider: &'static str,
    phone: &'static str,
    slots: &'static [&'static str],
    location: &'static str,
}

const SEEDS: &[Seed] = &[
    Seed {
        id: "1",
        title: "Salon for Women",
        image: "https://images.unsplash.com/photo-1560066984-138dadb4c035",
        rating: 4.8,
        rupees: 299,
        description: "Haircut, facial, waxing & more",
        provider: "Glamour Beauty Salon",
        phone: "+91 98765 43210",
        slots: &[MORNING, EVENING],
        location: "Sector 18, Noida",
    },
    Seed {
        id: "2",
        title: "Salon for Men",
        image: "https://images.unsplash.com/photo-1503951914875-452162b0f3f1",
        rating: 4.7,
        rupees: 199,
        description: "Haircut, beard grooming & head massage",
        provider: "Dapper Den Grooming",
        phone: "+91 98110 22334",
        slots: &[MORNING, EVENING],
        location: "Sector 62, Noida",
    },
    Seed {
        id: "3",
        title: "AC Repair & Service",
        image: "https://images.unsplash.com/photo-1621905251189-08b45d6a269e",
        rating: 4.6,
        rupees: 499,
        description: "Gas refill, jet cleaning & installation",
        provider: "CoolAir Technicians",
        phone: "+91 99990 11223",
        slots: &[MORNING, EVENING],
        location: "Indirapuram, Ghaziabad",
    },
    Seed {
        id: "4",
        title: "Home Cleaning",
        image: "https://images.unsplash.com/photo-1581578731548-c64695cc6952",
        rating: 4.5,
        rupees: 699,
        description: "Deep cleaning for kitchen, bathroom & living areas",
        provider: "SparkleHome Services",
        phone: "+91 98730 44556",
        slots: &[MORNING],
        location: "Sector 50, Noida",
    },
    Seed {
        id: "5",
        title: "Plumbing",
        image: "https://images.unsplash.com/photo-1607472586893-edb57bdc0e39",
        rating: 4.4,
        rupees: 149,
        description: "Leak repair, tap & pipe fitting",
        provider: "QuickFix Plumbers",
        phone: "+91 97111 66778",
        slots: &[MORNING, EVENING],
        location: "Sector 15, Noida",
    },
    Seed {
        id: "6",
        title: "Electrician",
        image: "https://images.unsplash.com/photo-1621905252507-b35492cc74b4",
        rating: 4.6,
        rupees: 179,
        description: "Wiring, switchboards, fan & light installation",
        provider: "BrightSpark Electricals",
        phone: "+91 98181 99001",
        slots: &[EVENING],
        location: "Sector 27, Noida",
    },
];

/// Read-only catalog held in memory.
#[derive(Debug, Clone)]
pub struct StaticCatalog {
    listings: Vec<ServiceListing>,
}

impl StaticCatalog {
    /// Catalog over the given listings, kept in the given order.
    #[must_use]
    pub fn new(listings: Vec<ServiceListing>) -> Self {
        Self { listings }
    }

    /// The demo catalog of home services around Noida.
    ///
    /// # Errors
    ///
    /// Returns a validation error if a seed listing is malformed.
    pub fn demo() -> Result<Self, ServiceBayError> {
        let listings = SEEDS
            .iter()
            .map(|seed| {
                Ok(ServiceListing {
                    id: ListingId::new(seed.id)?,
                    title: seed.title.to_string(),
                    image: seed.image.to_string(),
                    rating: seed.rating,
                    price: Price::from_rupees(seed.rupees),
                    description: seed.description.to_string(),
                    provider: Provider {
                        name: seed.provider.to_string(),
                        phone: seed.phone.to_string(),
                        availability: seed.slots.iter().map(ToString::to_string).collect(),
                        location: seed.location.to_string(),
                    },
                })
            })
            .collect::<Result<Vec<_>, ServiceBayError>>()?;
        Ok(Self::new(listings))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.listings.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.listings.is_empty()
    }
}

impl CatalogRepository for StaticCatalog {
    fn get_all(&self) -> impl Future<Output = Result<Vec<ServiceListing>, ServiceBayError>> + Send {
        let all = self.listings.clone();
        async { Ok(all) }
    }

    fn get_by_id(
        &self,
        id: &ListingId,
    ) -> impl Future<Output = Result<Option<ServiceListing>, ServiceBayError>> + Send {
        let found = self.listings.iter().find(|listing| &listing.id == id).cloned();
        async { Ok(found) }
    }
}
