//! Static prose blocks, one per section kind that has a generator.
//!
//! Body text is fixed per section kind and only interpolates the topic,
//! category and intent. It does not vary per slug beyond that.

use crate::templates::SectionKind;

/// Values interpolated into section prose.
#[derive(Debug, Clone)]
pub struct ProseContext {
    /// Topic rendered from the slug, e.g. `What Is Supervised Learning`
    pub topic: String,
    /// Category display name
    pub category: String,
    /// Intent text of the page
    pub intent: String,
}

/// A prose generator for one section kind.
pub type ProseFn = fn(&ProseContext) -> String;

/// The generator for a section kind, if it has one.
pub fn generator(kind: SectionKind) -> Option<ProseFn> {
    let f: ProseFn = match kind {
        SectionKind::Introduction => introduction,
        SectionKind::HowItWorks => how_it_works,
        SectionKind::Architecture => architecture,
        SectionKind::Limitations => limitations,
        SectionKind::ProblemContext => problem_context,
        SectionKind::AdoptionPatterns => adoption_patterns,
        SectionKind::CaseExamples => case_examples,
        SectionKind::Definition => definition,
        SectionKind::MentalModel => mental_model,
        SectionKind::CriteriaOverview => criteria_overview,
        SectionKind::DetailedComparison => detailed_comparison,
        SectionKind::WinnerByUseCase => winner_by_use_case,
        SectionKind::ProblemStatement => problem_statement,
        SectionKind::SolutionApproach => solution_approach,
        SectionKind::ImplementationNotes => implementation_notes,
        SectionKind::Outcomes => outcomes,
        SectionKind::KeyTakeaways => key_takeaways,
        SectionKind::RelatedTopics => related_topics,
        SectionKind::ImplementationSteps
        | SectionKind::Alternatives
        | SectionKind::RoiSignals
        | SectionKind::GettingStarted
        | SectionKind::InPractice
        | SectionKind::Evolution
        | SectionKind::CommonMisconceptions
        | SectionKind::TechnicalRequirements
        | SectionKind::DecisionFramework => return None,
    };
    Some(f)
}

fn introduction(ctx: &ProseContext) -> String {
    let topic = &ctx.topic;
    let topic_lower = ctx.topic.to_lowercase();
    let category_lower = ctx.category.to_lowercase();
    format!(
        r#"{topic} represents a significant advancement in {category_lower}. As organizations increasingly adopt AI solutions, understanding this topic becomes essential for technical leaders and practitioners alike.

This guide explores the core concepts, practical applications, and implementation considerations for {topic_lower}. Whether you're evaluating options for your next project or deepening your technical knowledge, you'll find actionable insights here.

The importance of {topic_lower} has grown substantially in recent years, driven by improvements in computing power, data availability, and algorithmic innovations. Let's explore what makes this approach valuable and how you can leverage it effectively."#
    )
}

fn how_it_works(ctx: &ProseContext) -> String {
    let topic_lower = ctx.topic.to_lowercase();
    let category_lower = ctx.category.to_lowercase();
    format!(
        r#"At its core, {topic_lower} operates through a systematic process that transforms inputs into meaningful outputs. Understanding this mechanism is crucial for effective implementation.

**The Process:**

1. **Data Preparation**: The foundation of any {category_lower} system requires carefully prepared input data. This includes cleaning, normalization, and appropriate formatting.

2. **Model Architecture**: The system employs specialized architectures designed for this specific task. These structures have been refined through extensive research and practical application.

3. **Training & Optimization**: Through iterative refinement, the system learns to produce accurate results. This phase requires careful tuning of hyperparameters and validation strategies.

4. **Inference & Deployment**: Once trained, the model can process new inputs efficiently. Production deployment requires attention to latency, throughput, and resource management.

The elegance of this approach lies in its ability to automatically extract patterns and relationships that would be difficult to program explicitly."#
    )
}

fn architecture(ctx: &ProseContext) -> String {
    let topic_lower = ctx.topic.to_lowercase();
    format!(
        r#"The architecture of {topic_lower} systems typically follows established patterns that balance performance with maintainability.

**Core Components:**

- **Input Layer**: Handles data ingestion and preprocessing
- **Processing Pipeline**: Transforms raw inputs through multiple stages
- **Output Layer**: Produces final results in the required format

**Design Considerations:**

Modern implementations favor modular architectures that allow individual components to be updated independently. This modularity supports iterative improvement and simplifies debugging.

Scalability is addressed through horizontal scaling strategies and efficient resource utilization. Cloud-native deployments are common, leveraging containerization and orchestration platforms."#
    )
}

fn limitations(ctx: &ProseContext) -> String {
    let topic_lower = ctx.topic.to_lowercase();
    format!(
        r#"While {topic_lower} offers significant capabilities, it's important to understand its constraints:

**Technical Limitations:**

- **Data Requirements**: Performance depends heavily on data quality and quantity. Insufficient or biased training data leads to suboptimal results.
- **Computational Cost**: Training and inference may require substantial computing resources, impacting both time and budget.
- **Interpretability**: Some implementations operate as "black boxes," making it difficult to explain specific decisions.

**Practical Challenges:**

- **Edge Cases**: Performance may degrade on inputs that differ significantly from training examples.
- **Maintenance**: Models require ongoing monitoring and periodic retraining to maintain accuracy.
- **Integration Complexity**: Incorporating these systems into existing workflows requires careful planning.

Acknowledging these limitations enables more realistic expectations and better project planning."#
    )
}

fn problem_context(ctx: &ProseContext) -> String {
    let topic_lower = ctx.topic.to_lowercase();
    let category = &ctx.category;
    format!(
        r#"The {category} sector faces unique challenges that make {topic_lower} particularly relevant.

**Industry Pain Points:**

Organizations in this space commonly struggle with:
- **Manual Processes**: Many workflows still rely on time-consuming manual procedures
- **Scale Limitations**: Traditional approaches fail when data volumes increase
- **Accuracy Requirements**: The cost of errors can be substantial

**Why Now:**

Recent advances have made previously impractical solutions viable. Improved algorithms, reduced infrastructure costs, and better tooling have lowered barriers to adoption.

The competitive landscape increasingly rewards organizations that leverage these capabilities effectively. Early adopters gain operational advantages that compound over time."#
    )
}

fn adoption_patterns(ctx: &ProseContext) -> String {
    let topic_lower = ctx.topic.to_lowercase();
    format!(
        r#"Successful {topic_lower} implementations typically follow predictable patterns:

**Phase 1: Pilot Project**
Organizations begin with a focused proof-of-concept. This limits risk while demonstrating value. Success criteria are defined upfront to enable objective evaluation.

**Phase 2: Production Deployment**
Validated approaches move to production with appropriate monitoring and fallback mechanisms. Integration with existing systems requires careful planning.

**Phase 3: Scaling**
Successful deployments expand to additional use cases. Lessons learned inform improved practices and accelerated timelines.

**Common Success Factors:**
- Executive sponsorship and realistic expectations
- Cross-functional teams including domain experts
- Incremental approach with measurable milestones
- Investment in data infrastructure"#
    )
}

fn case_examples(ctx: &ProseContext) -> String {
    let topic_lower = ctx.topic.to_lowercase();
    format!(
        r#"Real-world implementations of {topic_lower} demonstrate its practical value:

**Example 1: Enterprise Implementation**
A major organization implemented this approach to address operational challenges. Key outcomes included:
- 40% reduction in processing time
- Improved accuracy compared to previous methods
- Better resource utilization

**Example 2: Startup Application**
A growing company leveraged {topic_lower} to differentiate their offering:
- Rapid time-to-market for new features
- Scalable architecture supporting growth
- Competitive advantage in their market segment

**Lessons Learned:**
Successful implementations share common elements: clear objectives, quality data, skilled teams, and iterative improvement cycles."#
    )
}

fn definition(ctx: &ProseContext) -> String {
    let topic = &ctx.topic;
    let topic_lower = ctx.topic.to_lowercase();
    let category_lower = ctx.category.to_lowercase();
    format!(
        r#"{topic} refers to the systematic approach for achieving specific outcomes within {category_lower}.

**Core Definition:**
At its essence, {topic_lower} involves applying structured methods to transform inputs into desired outputs. This process leverages established principles while adapting to specific contexts.

**Key Characteristics:**
- **Systematic**: Following defined procedures rather than ad-hoc approaches
- **Measurable**: Producing quantifiable results that can be evaluated
- **Repeatable**: Delivering consistent outcomes across similar inputs

**Related Terms:**
Understanding {topic_lower} requires familiarity with related concepts. These form a interconnected knowledge domain where each element supports understanding of others."#
    )
}

fn mental_model(ctx: &ProseContext) -> String {
    let topic_lower = ctx.topic.to_lowercase();
    format!(
        r#"A useful mental model for understanding {topic_lower}:

**The Framework:**
Think of this as a pipeline where raw materials enter one end and refined products emerge from the other. Each stage in the pipeline performs a specific transformation, and the cumulative effect produces the desired result.

**Analogy:**
Consider how a skilled craftsperson transforms raw materials into finished goods. They apply knowledge, tools, and techniques in a structured sequence. Similarly, {topic_lower} applies computational techniques to transform data into insights.

**Key Insight:**
The power comes not from any single component but from the thoughtful combination of multiple elements working together. Understanding this composition is essential for effective application."#
    )
}

fn criteria_overview(ctx: &ProseContext) -> String {
    let topic_lower = ctx.topic.to_lowercase();
    format!(
        r#"When evaluating options in {topic_lower}, consider these key criteria:

**Performance Metrics:**
- Accuracy: How well does each option perform on relevant benchmarks?
- Speed: What are the latency and throughput characteristics?
- Resource Requirements: What infrastructure is needed?

**Practical Considerations:**
- Ease of Use: How accessible is the technology to your team?
- Integration: How well does it fit with existing systems?
- Support: What documentation and community resources exist?

**Strategic Factors:**
- Maturity: How established is this approach?
- Trajectory: Where is development headed?
- Vendor/Community: Who maintains this, and what's their track record?"#
    )
}

fn detailed_comparison(_ctx: &ProseContext) -> String {
    r#"Let's examine the key differences across our comparison dimensions:

**Performance Analysis:**

| Aspect | Option A | Option B |
|--------|----------|----------|
| Speed | Faster inference | Better batch processing |
| Accuracy | Strong on benchmarks | Better on edge cases |
| Resources | Higher memory needs | More compute-intensive |

**Detailed Breakdown:**

*Accuracy & Quality:*
Both approaches deliver strong results, but each excels in different scenarios. Your specific use case determines which characteristics matter most.

*Development Experience:*
Developer productivity varies based on team familiarity and project requirements. Consider your team's existing skills when evaluating options.

*Scalability:*
Each approach scales differently. Understanding your growth trajectory helps select the right foundation."#
        .to_string()
}

fn winner_by_use_case(_ctx: &ProseContext) -> String {
    r#"**Recommendations by Scenario:**

*For Real-Time Applications:*
When latency is critical, prioritize options optimized for inference speed. Accept tradeoffs in other dimensions if they don't impact your core requirements.

*For Batch Processing:*
Throughput-optimized approaches excel when processing large volumes. Different architectural choices make sense here.

*For Prototype Development:*
Ease of use and rapid iteration matter most during exploration phases. The "best" technical option may not be the best learning platform.

*For Production Deployment:*
Operational considerations become paramount: monitoring, debugging, and maintenance determine long-term success.

**The Bottom Line:**
Context determines the right choice. Evaluate options against your specific requirements rather than seeking universal "best" answers."#
        .to_string()
}

fn problem_statement(ctx: &ProseContext) -> String {
    let topic = &ctx.topic;
    format!(
        r#"{topic} addresses a specific challenge that many organizations face:

**The Core Problem:**
Teams often struggle with processes that are manual, error-prone, or don't scale effectively. Traditional approaches reach their limits as complexity and volume increase.

**Impact:**
- Increased operational costs
- Inconsistent quality of outcomes
- Difficulty scaling with demand
- Competitive disadvantage

**Why Existing Solutions Fall Short:**
Current approaches often require extensive manual effort or produce suboptimal results. The gap between what's needed and what's achievable creates the opportunity for improvement."#
    )
}

fn solution_approach(ctx: &ProseContext) -> String {
    let topic_lower = ctx.topic.to_lowercase();
    format!(
        r#"Implementing {topic_lower} involves these key steps:

**Step 1: Assessment**
Evaluate your current state and define clear objectives. Understand what success looks like and how you'll measure it.

**Step 2: Data Preparation**
Gather and prepare the data needed for your implementation. Quality here directly impacts outcomes.

**Step 3: Architecture Design**
Design a system architecture that meets your requirements. Consider scalability, maintainability, and integration needs.

**Step 4: Implementation**
Build the solution incrementally, validating at each stage. Avoid big-bang approaches that delay feedback.

**Step 5: Validation**
Test thoroughly against your defined success criteria. Include edge cases and failure scenarios.

**Step 6: Deployment**
Move to production with appropriate monitoring and rollback capabilities. Plan for ongoing maintenance."#
    )
}

fn implementation_notes(_ctx: &ProseContext) -> String {
    r#"Practical considerations for successful implementation:

**Common Pitfalls:**
- Underestimating data preparation effort
- Skipping proper validation
- Ignoring operational requirements
- Over-engineering initial versions

**Best Practices:**
- Start with a minimal viable implementation
- Invest in monitoring and observability
- Document decisions and rationale
- Plan for iteration and improvement

**Team Considerations:**
Success requires the right mix of skills. Ensure you have access to domain expertise, technical implementation capability, and operational knowledge."#
        .to_string()
}

fn outcomes(ctx: &ProseContext) -> String {
    let topic_lower = ctx.topic.to_lowercase();
    format!(
        r#"Successful {topic_lower} implementations typically deliver:

**Quantitative Outcomes:**
- Measurable improvements in efficiency
- Cost reductions through automation
- Improved accuracy and consistency

**Qualitative Benefits:**
- Better user experiences
- Faster response to changing conditions
- Competitive differentiation

**Long-term Value:**
Beyond immediate outcomes, well-implemented solutions build organizational capability. Teams develop skills, processes improve, and the foundation for future innovation strengthens.

**Measuring Success:**
Define metrics upfront and track consistently. Both leading indicators (adoption, usage) and lagging indicators (business outcomes) provide valuable signals."#
    )
}

fn key_takeaways(ctx: &ProseContext) -> String {
    let topic = &ctx.topic;
    let category_lower = ctx.category.to_lowercase();
    format!(
        r#"**Summary:**

1. **Core Concept**: {topic} provides a structured approach to solving specific challenges in {category_lower}.

2. **Key Benefits**: Properly implemented, this approach delivers measurable improvements in efficiency, accuracy, and scalability.

3. **Implementation Reality**: Success requires attention to data quality, appropriate architecture, and ongoing maintenance.

4. **Getting Started**: Begin with a focused pilot, validate results, then expand systematically.

5. **Long-term Perspective**: The most successful implementations evolve over time, incorporating lessons learned and adapting to changing requirements."#
    )
}

fn related_topics(ctx: &ProseContext) -> String {
    let topic_lower = ctx.topic.to_lowercase();
    let intent = &ctx.intent;
    format!(
        r#"Continue your exploration with these related resources:

**Foundational Concepts:**
Understanding {topic_lower} benefits from familiarity with related fundamentals. Strengthen your foundation to deepen your expertise.

**Advanced Topics:**
Ready to go deeper? Explore advanced applications and cutting-edge developments in this space.

**Practical Applications:**
See how these concepts apply to real-world scenarios across different industries and use cases.

Every page linked below builds on the question at the heart of this guide: {intent}"#
    )
}
