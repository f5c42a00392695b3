//! Static page copy: itinerary, inclusions, FAQ and the home page cards.

use shared::Icon;

pub struct ItineraryDay {
    pub day: u32,
    pub title: &'static str,
    pub description: &'static str,
}

pub struct Inclusion {
    pub text: &'static str,
    pub included: bool,
}

pub struct Faq {
    pub question: &'static str,
    pub answer: &'static str,
}

pub struct Destination {
    pub number: &'static str,
    pub title: &'static str,
    pub tag: &'static str,
    pub description: &'static str,
}

pub struct Highlight {
    pub icon: Icon,
    pub label: &'static str,
}

pub struct Pillar {
    pub icon: Icon,
    pub title: &'static str,
    pub description: &'static str,
}

pub const ITINERARY: [ItineraryDay; 8] = [
    ItineraryDay { day: 1, title: "Welcome to Sicily (Trapani)", description: "Arrival in Trapani. After checking into our boutique accommodation, we freshen up and head out for our first Sicilian dinner. Overnight in Trapani." },
    ItineraryDay { day: 2, title: "Exploring the West Coast", description: "We pick up our rental cars and head straight for the sea. Whether it's the wild beauty of Monte Cofano or the serene Macari beach, today is about salt on your skin." },
    ItineraryDay { day: 3, title: "Zingaro Reserve & San Vito", description: "We board a private boat to explore the Zingaro Reserve and swim in turquoise coves accessible only by sea. Afternoon aperitivo at the Tonnara." },
    ItineraryDay { day: 4, title: "Erice & Marsala Salt Pans", description: "A slower morning, then a drive up the misty mountain to the medieval town of Erice. In the late afternoon we chase the sunset at the Marsala Salt Pans." },
    ItineraryDay { day: 5, title: "Ferry to Favignana", description: "We leave the mainland for the Egadi archipelago and rent bicycles to explore this butterfly-shaped island at a slow pace. Hidden calas await." },
    ItineraryDay { day: 6, title: "Boat Day at Marettimo", description: "A full day excursion to Marettimo, the wildest and most remote of the islands, with sea caves and coastlines untouched by time." },
    ItineraryDay { day: 7, title: "Levanzo or Leisure", description: "A free day to revisit your favorite spot in Favignana or take a quick boat ride to the tiny, car-free island of Levanzo for a granita and a dip in the blue." },
    ItineraryDay { day: 8, title: "Arrivederci", description: "Morning ferry back to Trapani, transfer to the airport, and final farewells." },
];

pub const INCLUSIONS: [Inclusion; 8] = [
    Inclusion { text: "7 Nights accommodation in boutique hotels", included: true },
    Inclusion { text: "Rental cars (Days 2-4)", included: true },
    Inclusion { text: "Ferry transfers to Egadi Islands", included: true },
    Inclusion { text: "Full day boat excursion to Zingaro Reserve", included: true },
    Inclusion { text: "Coordinator assistance 24/7", included: true },
    Inclusion { text: "Medical & Luggage Insurance", included: true },
    Inclusion { text: "Flights to/from Sicily", included: false },
    Inclusion { text: "Meals and drinks (Shared fund approx €180)", included: false },
];

pub const FAQS: [Faq; 4] = [
    Faq { question: "What is the physical rating for this trip?", answer: "This trip is rated 'Relaxed'. There is some walking in Erice and biking in Favignana on flat terrain, but overall it suits anyone in good health." },
    Faq { question: "What is the 'Shared Fund'?", answer: "The shared fund (approx €180) is collected by the coordinator on day 1 to cover communal costs like fuel, parking and agreed-upon group meals." },
    Faq { question: "Do I need to book my own flights?", answer: "Yes. You can arrive from any airport you choose, as long as you meet at the hotel in Trapani by 6:00 PM on Day 1." },
    Faq { question: "What type of accommodation do we use?", answer: "We stay in highly-rated boutique hotels or guesthouses (3-4 stars). Rooms are typically shared twin/double rooms; a single supplement is available upon request." },
];

pub const DESTINATIONS: [Destination; 3] = [
    Destination { number: "01", title: "Palermo", tag: "Capital of Culture", description: "Wander through a golden haze of history, from Arab-Norman mosaics to the vibrant chaos of the Ballarò markets." },
    Destination { number: "02", title: "Catania", tag: "The Black City", description: "Built from the very lava that once destroyed it. Baroque elegance carved from dark volcanic stone at the foot of Mount Etna." },
    Destination { number: "03", title: "Etna Vineyards", tag: "Volcanic Wine Tasting", description: "Taste wines grown on the slopes of Europe's most active volcano." },
];

pub const FEATURED_HIGHLIGHTS: [Highlight; 5] = [
    Highlight { icon: Icon::Sun, label: "7 Days" },
    Highlight { icon: Icon::Calendar, label: "May - Oct" },
    Highlight { icon: Icon::BarChart, label: "Moderate" },
    Highlight { icon: Icon::MapPin, label: "Catania Airport" },
    Highlight { icon: Icon::Users, label: "Small Group" },
];

pub const PILLARS: [Pillar; 3] = [
    Pillar { icon: Icon::Compass, title: "Slow Travel", description: "We prioritize immersion over checklists, allowing you to synchronize with the island's rhythm." },
    Pillar { icon: Icon::Anchor, title: "Local Roots", description: "Every guide, host and skipper we work with was born on the island." },
    Pillar { icon: Icon::Heart, title: "Soulful Luxury", description: "Comfort that never gets between you and the place you came to see." },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_itinerary_days_are_consecutive() {
        for (index, day) in ITINERARY.iter().enumerate() {
            assert_eq!(day.day as usize, index + 1);
        }
    }
}
