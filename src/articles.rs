//! Compiled-in article content
//!
//! The magazine ships a fixed issue. Articles are immutable statics: there is
//! no creation, editing, or deletion path at runtime.

/// A single magazine article
#[derive(Debug, PartialEq, Eq)]
pub struct Article {
    /// Unique identifier
    pub id: u32,
    pub title: &'static str,
    /// One-line teaser shown in the article list
    pub excerpt: &'static str,
    /// Rich-text body (small HTML fragment, see `richtext`)
    pub body: &'static str,
}

/// Issue label shown under the magazine blurb
pub const ISSUE_LABEL: &str = "Issue 34: The Digital Renaissance";

/// All articles in this issue, in display order
pub static ARTICLES: [Article; 2] = [
    Article {
        id: 1,
        title: "The Future of Urban Design",
        excerpt: "Exploring innovative approaches to city planning and architecture.",
        body: r#"
      <h2>Reimagining City Spaces</h2>
      <p>As we step into a new era of urban living, architects and city planners are rethinking the very fabric of our metropolitan areas. The focus is shifting towards creating more sustainable, livable, and human-centric urban environments.</p>

      <h2>Sustainable Infrastructure</h2>
      <p>The cities of tomorrow are being built on the foundation of sustainability. From green buildings to smart energy grids, urban planners are integrating eco-friendly solutions into every aspect of city life.</p>

      <h2>Community-Centric Design</h2>
      <p>Urban designers are placing a renewed focus on creating spaces that foster community interaction and social cohesion. This involves the development of mixed-use neighborhoods, pedestrian-friendly streets, and public spaces that encourage social gatherings and cultural events.</p>

      <h2>The Role of Technology</h2>
      <p>Smart city technologies are revolutionizing urban management, from traffic control to waste management. The integration of IoT devices, AI, and big data analytics is enabling cities to operate more efficiently and respond more effectively to the needs of their residents.</p>
    "#,
    },
    Article {
        id: 2,
        title: "The Evolution of Digital Art",
        excerpt: "From pixels to virtual realities: the journey of digital artistic expression.",
        body: r#"
      <h2>From Pixels to Virtual Realities</h2>
      <p>The journey of digital art has been nothing short of revolutionary. From early pixel art to today's immersive VR experiences, digital artists have continually pushed the boundaries of creativity and technology.</p>

      <h2>AI and Generative Art</h2>
      <p>Artificial Intelligence is not just a tool but a collaborator in the creative process, giving rise to entirely new forms of artistic expression. AI algorithms can now generate unique artworks, compose music, and even write poetry, challenging our understanding of creativity and authorship.</p>

      <h2>NFTs and Digital Ownership</h2>
      <p>The advent of blockchain technology has introduced the concept of verifiable digital ownership, transforming how we value and collect digital art. NFTs (Non-Fungible Tokens) have created a new market for digital artworks, allowing artists to monetize their creations in unprecedented ways.</p>

      <h2>The Future of Digital Galleries</h2>
      <p>As the line between physical and digital spaces blurs, art galleries are evolving to showcase digital works in innovative ways. Virtual and augmented reality technologies are enabling immersive exhibition experiences, while online platforms are making art more accessible to global audiences.</p>
    "#,
    },
];
