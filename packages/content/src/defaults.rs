//! Built-in copy shipped with the site.
//!
//! Used when the content store is unconfigured, unreachable, or has no row
//! for a section.

use crate::records::*;
use crate::ContentMap;

fn s(value: &str) -> String {
    value.to_string()
}

impl ContentMap {
    pub fn defaults() -> Self {
        Self {
            hero: default_hero(),
            contact_info: default_contact_info(),
            certifications: default_certifications(),
            fees: default_fees(),
            faq: default_faq(),
            contact: default_contact(),
            testimonials: default_testimonials(),
        }
    }
}

fn default_hero() -> HeroContent {
    HeroContent {
        headline: s("Think Fit with Ritu"),
        tagline: s("Choose Strong over Skinny!"),
        description: s(
            "Transform your relationship with food and achieve lasting health through personalized nutrition guidance. No crash diets, no restrictions, just sustainable habits for a stronger you.",
        ),
        primary_cta: CallToAction {
            text: s("Book Consultation"),
            link: s("#contact"),
        },
        secondary_cta: CallToAction {
            text: s("View Services"),
            link: s("#fees"),
        },
        image: s("https://images.unsplash.com/photo-1490645935967-10de6ba17061?w=800&q=80"),
        image_alt: s("Healthy food and nutrition"),
        highlights: vec![
            Highlight { id: None, value: s("500+"), label: s("Happy Clients") },
            Highlight { id: None, value: s("8+"), label: s("Years Experience") },
            Highlight { id: None, value: s("98%"), label: s("Success Rate") },
        ],
    }
}

fn default_contact_info() -> ContactInfo {
    ContactInfo {
        phone: s("+91 98XXX XXXXX"),
        whatsapp: s("+919800000000"),
        email: s("ritu@example.com"),
        city: s("Mumbai"),
        address: s("Mumbai, Maharashtra, India"),
        instagram: s("https://instagram.com/ritusharma"),
        facebook: String::new(),
        linkedin: String::new(),
        whatsapp_message: s(
            "Hi Ritu! I'd like to know more about your nutrition consultation services.",
        ),
    }
}

fn default_certifications() -> CertificationsContent {
    let cert = |id, title: &str, institution: &str, description: &str, icon: &str| Certification {
        id,
        title: s(title),
        institution: s(institution),
        description: s(description),
        icon: s(icon),
    };

    CertificationsContent {
        section_title: s("Certifications & Qualifications"),
        section_subtitle: s("Backed by education and expertise"),
        certifications: vec![
            cert(
                1,
                "Health and Wellness: Designing a Sustainable Nutrition Plan",
                "Harvard Medical School Executive Education",
                "Advanced training in creating sustainable, science-backed nutrition strategies for long-term health.",
                "award",
            ),
            cert(
                2,
                "Certified Genomic Wellness Consultant",
                "Welocity Institute of Genomics (WIGNET)",
                "Specialized in nutrigenomics: personalizing nutrition based on your unique genetic profile.",
                "award",
            ),
            cert(
                3,
                "Certified Sports Nutritionist",
                "K11 School of Fitness Sciences (Skill India & NSDC)",
                "Expert training in nutrition for athletes, fitness enthusiasts, and active individuals.",
                "certificate",
            ),
            cert(
                4,
                "Diploma in Personal Training",
                "K11 School of Fitness Sciences (Skill India & NSDC)",
                "Comprehensive training in exercise science, anatomy, program design, and client coaching for fitness professionals.",
                "certificate",
            ),
            cert(
                5,
                "Bachelor of Science - Biology",
                "Guru Nanak Dev University",
                "Strong foundation in biological sciences, human physiology, and biochemistry.",
                "book",
            ),
        ],
    }
}

fn default_fees() -> FeesContent {
    let service = |id, name: &str, price: &str, duration: &str, description: &str, features: &[&str], popular| {
        Service {
            id,
            name: s(name),
            price: s(price),
            duration: s(duration),
            description: s(description),
            features: features.iter().map(|f| s(f)).collect(),
            popular,
        }
    };

    FeesContent {
        section_title: s("Services & Fees"),
        section_subtitle: s("Investment in your health"),
        currency: s("₹"),
        services: vec![
            service(
                1,
                "Initial Consultation",
                "X,XXX",
                "60 minutes",
                "Comprehensive health assessment, body composition analysis, and personalized diet plan.",
                &[
                    "Detailed health history review",
                    "Body composition analysis",
                    "Customized meal plan",
                    "Lifestyle recommendations",
                ],
                false,
            ),
            service(
                2,
                "Monthly Package",
                "X,XXX",
                "4 weeks",
                "Complete monthly program with weekly follow-ups and diet adjustments.",
                &[
                    "Initial consultation included",
                    "Weekly follow-up calls",
                    "Diet plan modifications",
                    "WhatsApp support",
                    "Progress tracking",
                ],
                true,
            ),
            service(
                3,
                "3-Month Transformation",
                "XX,XXX",
                "12 weeks",
                "Intensive program for significant health transformation with continuous support.",
                &[
                    "Everything in Monthly Package",
                    "Bi-weekly video consultations",
                    "Recipe suggestions",
                    "Grocery shopping guide",
                    "Priority support",
                    "Progress reports",
                ],
                false,
            ),
            service(
                4,
                "Follow-up Session",
                "XXX",
                "30 minutes",
                "Quick check-in for existing clients to review progress and adjust plans.",
                &["Progress review", "Diet modifications", "Query resolution"],
                false,
            ),
        ],
        note: s("All prices are inclusive of taxes. Payment plans available for long-term packages."),
    }
}

fn default_faq() -> FaqContent {
    let faq = |id, question: &str, answer: &str| Faq {
        id,
        question: s(question),
        answer: s(answer),
    };

    FaqContent {
        section_title: s("Frequently Asked Questions"),
        section_subtitle: s("Got questions? I've got answers"),
        faqs: vec![
            faq(
                1,
                "Do you provide online consultations?",
                "Yes! I offer both in-person consultations in Mumbai and online consultations via video call for clients across India and abroad. The online experience is just as comprehensive as in-person sessions.",
            ),
            faq(
                2,
                "Will I have to give up my favorite foods?",
                "Absolutely not! My philosophy is 'Choose Strong over Skinny.' I believe in sustainable nutrition that includes your favorite foods in moderation. No food is completely off-limits; it's all about balance and making informed choices.",
            ),
            faq(
                3,
                "How soon can I expect to see results?",
                "Results vary based on individual goals and commitment. Most clients notice improvements in energy levels within the first 2 weeks. Visible changes in weight and body composition typically appear within 4-6 weeks of following the plan consistently.",
            ),
            faq(
                4,
                "Do you work with specific health conditions?",
                "Yes, I specialize in nutrition for various health conditions including diabetes, PCOS, thyroid disorders, digestive issues, and cardiovascular health. I work closely with your healthcare provider to ensure coordinated care.",
            ),
            faq(
                5,
                "What happens in the first consultation?",
                "The initial consultation is a comprehensive 60-minute session where we discuss your health history, current eating habits, lifestyle, goals, and any health concerns. I may also conduct a body composition analysis. Based on this, I create your personalized nutrition plan.",
            ),
            faq(
                6,
                "How do follow-up sessions work?",
                "Follow-up sessions are typically 30 minutes and can be done via phone or video call. We review your progress, address any challenges, and modify your diet plan as needed. For package clients, these are scheduled weekly or bi-weekly.",
            ),
            faq(
                7,
                "Do you provide meal plans and recipes?",
                "Yes! Every client receives a detailed meal plan tailored to their preferences, cooking skills, and schedule. I also provide easy-to-follow recipes and can accommodate dietary restrictions, allergies, and regional food preferences.",
            ),
            faq(
                8,
                "What is your cancellation policy?",
                "I request at least 24 hours notice for cancellations or rescheduling. Appointments cancelled within 24 hours may be charged a cancellation fee. I understand emergencies happen, so please reach out if you need flexibility.",
            ),
        ],
    }
}

fn default_contact() -> ContactContent {
    ContactContent {
        section_title: s("Contact & Booking"),
        section_subtitle: String::new(),
        message: s(
            "Every person's health journey is unique, and I truly enjoy being a part of it. If you're ready to take the next step toward better health, reach out and let's discuss how I can help you achieve your goals.",
        ),
        cta_text: s("Book a Consultation via WhatsApp"),
        availability: Availability {
            days: s("Available Every Day"),
            hours: s("12:00 PM - 8:00 PM"),
            note: s("I typically respond within a few hours"),
        },
    }
}

fn default_testimonials() -> TestimonialsContent {
    let testimonial = |id, name: &str, role: &str, image: &str, text: &str| Testimonial {
        id,
        name: s(name),
        role: s(role),
        image: s(image),
        rating: 5,
        text: s(text),
    };

    TestimonialsContent {
        section_title: s("What My Clients Say"),
        section_subtitle: s("Real transformations, real stories"),
        testimonials: vec![
            testimonial(
                1,
                "Priya M.",
                "Working Professional",
                "https://images.unsplash.com/photo-1494790108377-be9c29b29330?w=150&q=80",
                "Ritu's approach to nutrition is refreshing. She doesn't believe in restrictive diets. I've lost 12 kgs in 4 months while still enjoying my favorite foods!",
            ),
            testimonial(
                2,
                "Amit S.",
                "Fitness Enthusiast",
                "https://images.unsplash.com/photo-1507003211169-0a1dd7228f2d?w=150&q=80",
                "As someone who works out regularly, I needed a nutritionist who understands sports nutrition. Ritu helped me optimize my diet for better performance.",
            ),
            testimonial(
                3,
                "Sneha K.",
                "New Mother",
                "https://images.unsplash.com/photo-1438761681033-6461ffad8d80?w=150&q=80",
                "Post-pregnancy weight loss seemed impossible until I met Ritu. Her sustainable approach helped me get back in shape while ensuring proper nutrition for breastfeeding.",
            ),
            testimonial(
                4,
                "Rajesh P.",
                "Diabetes Patient",
                "https://images.unsplash.com/photo-1472099645785-5658abf4ff4e?w=150&q=80",
                "My HbA1c levels have improved significantly under Ritu's guidance. She made managing diabetes through diet simple and practical.",
            ),
        ],
    }
}
