//! Technology stack section.

use leptos::prelude::*;

use crate::components::cards::ChecklistCard;

const TECHNOLOGIES: [(&str, &str, &[&str]); 4] = [
    (
        "3D Geometry Analysis",
        "Extracts 3D patches within detected regions to refine defect geometry. This allows for accurate measurement of pothole depth, area, and crack dimensions.",
        &["Depth Measurement", "Area Calculation", "Crack Dimension Analysis"],
    ),
    (
        "Advanced Sensor Fusion",
        "Integrates RGB and depth images from stereo cameras and LiDAR. This fusion provides 3D cues, enhancing robustness and accuracy in diverse conditions.",
        &["RGB Camera Integration", "LiDAR Point Cloud Processing", "Multi-sensor Data Fusion"],
    ),
    (
        "Hybrid Deep Learning Models",
        "Combines lightweight detectors for real-time candidate region proposal with high-accuracy semantic segmentation networks for pixel-level defect identification.",
        &["Real-time Detection", "Semantic Segmentation", "Edge-optimized Inference"],
    ),
    (
        "Automated Severity Assessment",
        "Translates geometric measurements into quantitative metrics (e.g., IRI/PCI alignment) for objective road quality scoring, enabling prioritized maintenance.",
        &["IRI/PCI Alignment", "Quantitative Scoring", "Prioritization Algorithms"],
    ),
];

#[component]
pub fn Technology() -> impl IntoView {
    view! {
        <section id="technology" class="section technology">
            <div class="section__header">
                <h2 class="section__title">"Advanced Technology"</h2>
                <p class="section__lead">
                    "Our solution leverages cutting-edge technologies to deliver accurate and reliable results."
                </p>
            </div>
            <div class="grid grid--two">
                {TECHNOLOGIES
                    .iter()
                    .map(|&(title, description, items)| view! { <ChecklistCard title=title description=description items=items/> })
                    .collect_view()}
            </div>
        </section>
    }
}
