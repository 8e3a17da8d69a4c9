//! Deterministic stand-in text for formats without a working decoder.
//!
//! Output depends only on the topic and format, so analysis of a fallback
//! document is reproducible.

use crate::config::schema::DocumentFormat;

const PDF_TEMPLATE: &str = "
# {TOPIC} - COMPREHENSIVE GUIDE

## Introduction
This document provides an in-depth analysis of {topic}, covering fundamental concepts, advanced methodologies, and practical applications in modern contexts.

## Core Concepts
Understanding {topic} requires mastery of several key principles:
- Foundational theories and frameworks
- Historical development and evolution
- Current best practices and standards
- Emerging trends and future directions

## Key Terminology
- {topic} fundamentals: The basic building blocks
- Core methodology: Systematic approaches
- Best practices: Industry-proven techniques
- Quality standards: Benchmarks for excellence
- Innovation drivers: Factors promoting advancement

## Practical Applications
Real-world implementation of {topic} involves:
1. Strategic planning and analysis
2. Systematic implementation approaches
3. Performance monitoring and optimization
4. Continuous improvement processes

## Advanced Topics
For deeper understanding, consider:
- Complex problem-solving techniques
- Integration with related disciplines
- Leadership and management aspects
- Ethical considerations and implications

## Conclusion
Mastery of {topic} requires dedicated study, practical application, and continuous learning to stay current with evolving standards and practices.";

const DOCX_TEMPLATE: &str = "
{TOPIC} - DETAILED STUDY MATERIAL

Table of Contents:
1. Overview and Introduction
2. Fundamental Principles
3. Detailed Analysis
4. Case Studies
5. Best Practices
6. Future Considerations

Overview:
This comprehensive guide explores {topic} from multiple perspectives, providing students with thorough understanding of core concepts and practical applications.

Fundamental Principles:
The study of {topic} is built upon several key principles that form the foundation for advanced learning and practical application.

Key Learning Objectives:
- Understand core concepts of {topic}
- Apply theoretical knowledge to practical scenarios
- Analyze complex problems and develop solutions
- Evaluate different approaches and methodologies

Assessment Criteria:
Students will be evaluated on their understanding of fundamental concepts, ability to apply knowledge in practical situations, and capacity for critical analysis.";

const PPTX_TEMPLATE: &str = "
{TOPIC} - PRESENTATION CONTENT

Slide 1: Introduction to {topic}
- Welcome and overview
- Learning objectives
- Session agenda

Slide 2: Key Concepts
- Definition and scope
- Core components
- Relationship to other fields

Slide 3: Fundamental Principles
- Primary theories
- Supporting frameworks
- Practical guidelines

Slide 4: Applications
- Real-world examples
- Case studies
- Implementation strategies

Slide 5: Best Practices
- Industry standards
- Proven methodologies
- Success factors

Slide 6: Advanced Topics
- Emerging trends
- Future developments
- Research opportunities

Slide 7: Summary and Next Steps
- Key takeaways
- Action items
- Additional resources";

const TEXT_TEMPLATE: &str = "
{topic} - Study Notes

Important Concepts:
- Understanding the basics of {topic}
- Key principles and applications
- Practical implementation strategies
- Common challenges and solutions

Study Objectives:
1. Master fundamental concepts
2. Develop practical skills
3. Apply knowledge effectively
4. Prepare for assessments

Key Terms to Remember:
- {topic} methodology
- Core principles
- Best practices
- Quality standards
- Implementation strategies

Practice Questions:
- What are the main components of {topic}?
- How does {topic} relate to other subjects?
- What are the practical applications?
- What challenges might arise in implementation?";

fn template(format: DocumentFormat) -> &'static str {
    match format {
        DocumentFormat::Pdf => PDF_TEMPLATE,
        DocumentFormat::Docx => DOCX_TEMPLATE,
        DocumentFormat::Pptx => PPTX_TEMPLATE,
        DocumentFormat::Text => TEXT_TEMPLATE,
    }
}

pub fn generate(topic: &str, format: DocumentFormat) -> String {
    template(format)
        .replace("{TOPIC}", &topic.to_uppercase())
        .replace("{topic}", topic)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generation_is_deterministic() {
        for format in DocumentFormat::ALL {
            assert_eq!(generate("quantum physics", format), generate("quantum physics", format));
        }
    }

    #[test]
    fn test_pdf_template_heading_is_uppercased() {
        let text = generate("quantum physics", DocumentFormat::Pdf);
        assert!(text.starts_with("\n# QUANTUM PHYSICS - COMPREHENSIVE GUIDE\n"));
        assert!(text.contains("in-depth analysis of quantum physics,"));
    }

    #[test]
    fn test_each_format_has_its_own_template() {
        let topic = "topic";
        assert!(generate(topic, DocumentFormat::Docx).contains("TOPIC - DETAILED STUDY MATERIAL"));
        assert!(generate(topic, DocumentFormat::Pptx).contains("TOPIC - PRESENTATION CONTENT"));
        assert!(generate(topic, DocumentFormat::Text).contains("topic - Study Notes"));
    }

    #[test]
    fn test_no_placeholders_remain() {
        for format in DocumentFormat::ALL {
            let text = generate("ecology", format);
            assert!(!text.contains("{topic}"));
            assert!(!text.contains("{TOPIC}"));
        }
    }

    #[test]
    fn test_structure_independent_of_topic() {
        let a = generate("a", DocumentFormat::Pptx);
        let b = generate("b", DocumentFormat::Pptx);
        assert_eq!(a.lines().count(), b.lines().count());
    }
}
