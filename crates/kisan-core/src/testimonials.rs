//! Testimonials
//!
//! Farmer stories shown on the landing page and the index that cycles
//! through them.

use std::time::Duration;

/// How long each testimonial stays on screen
pub const ROTATE_INTERVAL: Duration = Duration::from_secs(8);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Testimonial {
    pub name: &'static str,
    pub village: &'static str,
    pub quote: &'static str,
    pub image: &'static str,
}

impl Testimonial {
    /// Avatar fallback, e.g. "Sita Devi" -> "SD"
    pub fn initials(&self) -> String {
        initials(self.name)
    }
}

pub fn initials(name: &str) -> String {
    name.split_whitespace()
        .filter_map(|part| part.chars().next())
        .flat_map(char::to_uppercase)
        .collect()
}

pub static TESTIMONIALS: [Testimonial; 5] = [
    Testimonial {
        name: "Ravi Kumar",
        village: "Madhopur, Maharashtra",
        quote: "KisanEdge helped me understand how to treat soil acidity on my farm. After applying the expert's advice, my soybean yield increased by over 30%.",
        image: "/farmers/ravi.jpg",
    },
    Testimonial {
        name: "Sita Devi",
        village: "Rampur, Maharashtra",
        quote: "The consultant gave me a step-by-step plan for crop rotation. I saw fewer pests and better output. My family's income doubled in one season.",
        image: "/farmers/sita.jpg",
    },
    Testimonial {
        name: "Amit Singh",
        village: "Bhagalpur, Maharashtra",
        quote: "My sugarcane crops were struggling. KisanEdge helped me switch to the right treatment. My crops are now healthy and costs are lower.",
        image: "/farmers/amit.jpg",
    },
    Testimonial {
        name: "Meena Patel",
        village: "Sitapur, Maharashtra",
        quote: "I used the Request Callback feature. They helped me choose the right fertilizer plan. Everything was simple and effective.",
        image: "/farmers/meena.jpg",
    },
    Testimonial {
        name: "Dinesh Yadav",
        village: "Barabanki, Maharashtra",
        quote: "I wanted to try organic farming. The KisanEdge expert gave me a full plan. Now I sell my vegetables at 40% higher rates.",
        image: "/farmers/dinesh.jpg",
    },
];

/// Position in a fixed-length ring of slides
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Carousel {
    index: usize,
    len: usize,
}

impl Carousel {
    pub fn new(len: usize) -> Self {
        Self { index: 0, len }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Move one slide forward, wrapping from the last slide to the first.
    /// Called on every timer tick and by the "next" button.
    pub fn advance(&mut self) {
        if self.len > 0 {
            self.index = (self.index + 1) % self.len;
        }
    }

    pub fn retreat(&mut self) {
        if self.len > 0 {
            self.index = (self.index + self.len - 1) % self.len;
        }
    }

    /// Jump to a dot; out-of-range indices are ignored
    pub fn select(&mut self, index: usize) {
        if index < self.len {
            self.index = index;
        }
    }
}

impl Default for Carousel {
    fn default() -> Self {
        Self::new(TESTIMONIALS.len())
    }
}
