//! The built-in sample events.
//!
//! Six demo fixtures shown on every page. They are defined in a fixed
//! order, dated relative to "now", and never written to the remote table.
//! The catalog always lists them before remote rows, whatever their dates.

use chrono::{Duration, Utc};
use rand::Rng;

use crate::event::Event;

/// The fixed sample catalog, in declaration order.
pub fn sample_events() -> Vec<Event> {
    let now = Utc::now();

    vec![
        Event {
            id: "sample-1".to_string(),
            title: "Sunset Music Festival".to_string(),
            description: "Join us for an evening of live music featuring local bands. \
                Bring your friends and enjoy great vibes under the stars. Food trucks \
                and refreshments available!"
                .to_string(),
            location: "Central Park Amphitheater".to_string(),
            date: now + Duration::days(5),
            max_participants: 150,
            current_participants: 87,
            image_url: "assets/event-concert.jpg".to_string(),
            host_email: "events@musiclover.com".to_string(),
            distance: None,
        },
        Event {
            id: "sample-2".to_string(),
            title: "Coffee & Connect Morning".to_string(),
            description: "Start your day with meaningful conversations over artisan \
                coffee. Perfect for networking, making new friends, or just enjoying \
                good company in a cozy atmosphere."
                .to_string(),
            location: "Brew & Chat Café".to_string(),
            date: now + Duration::days(2),
            max_participants: 20,
            current_participants: 12,
            image_url: "assets/event-coffee.jpg".to_string(),
            host_email: "host@coffeemeetup.com".to_string(),
            distance: None,
        },
        Event {
            id: "sample-3".to_string(),
            title: "Morning Yoga in the Park".to_string(),
            description: "Reconnect with nature and yourself in this peaceful morning \
                yoga session. All levels welcome! Bring your own mat and water. We'll \
                focus on breathwork and gentle flows."
                .to_string(),
            location: "Riverside Park Lawn".to_string(),
            date: now + Duration::days(1),
            max_participants: 30,
            current_participants: 18,
            image_url: "assets/event-yoga.jpg".to_string(),
            host_email: "yoga@wellness.com".to_string(),
            distance: None,
        },
        Event {
            id: "sample-4".to_string(),
            title: "Street Food Festival".to_string(),
            description: "Explore cuisines from around the world! Over 30 food vendors \
                offering everything from tacos to sushi. Live entertainment throughout \
                the day. Don't miss this culinary adventure!"
                .to_string(),
            location: "Downtown Plaza".to_string(),
            date: now + Duration::days(7),
            max_participants: 500,
            current_participants: 342,
            image_url: "assets/event-food.jpg".to_string(),
            host_email: "info@foodfest.com".to_string(),
            distance: None,
        },
        Event {
            id: "sample-5".to_string(),
            title: "Contemporary Art Gallery Opening".to_string(),
            description: "Be among the first to experience our new contemporary art \
                exhibition. Meet the artists, enjoy complimentary wine, and immerse \
                yourself in thought-provoking modern pieces."
                .to_string(),
            location: "Modern Art Museum".to_string(),
            date: now + Duration::days(4),
            max_participants: 80,
            current_participants: 45,
            image_url: "assets/event-art.jpg".to_string(),
            host_email: "gallery@artspace.com".to_string(),
            distance: None,
        },
        Event {
            id: "sample-6".to_string(),
            title: "Mountain Hiking Adventure".to_string(),
            description: "Challenge yourself with a scenic mountain hike! Moderate \
                difficulty, approximately 8km trail. Stunning views guaranteed. \
                Experienced guide included. Bring sturdy shoes and water."
                .to_string(),
            location: "Summit Trail Head".to_string(),
            date: now + Duration::days(3),
            max_participants: 25,
            current_participants: 15,
            image_url: "assets/event-hiking.jpg".to_string(),
            host_email: "adventure@hikingclub.com".to_string(),
            distance: None,
        },
    ]
}

/// Display-only "N.N km away" label for events without a precomputed distance.
pub fn random_distance() -> String {
    let km: f64 = rand::rng().random_range(1.0..9.0);
    format!("{km:.1} km away")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn samples_are_fixed_and_ordered() {
        let samples = sample_events();

        let ids: Vec<&str> = samples.iter().map(|event| event.id.as_str()).collect();
        assert_eq!(
            ids,
            ["sample-1", "sample-2", "sample-3", "sample-4", "sample-5", "sample-6"]
        );
        assert!(samples.iter().all(|event| event.is_sample()));
    }

    #[test]
    fn random_distance_shape() {
        let label = random_distance();
        assert!(label.ends_with(" km away"));

        // the label is rounded to one decimal, so 8.96 may print as 9.0
        let km: f64 = label.strip_suffix(" km away").unwrap().parse().unwrap();
        assert!((1.0..=9.0).contains(&km));
    }
}
