//! Display implementations for domain models.

use std::fmt;

use crate::models::{
    Chapter, Duration, MonetizationFocus, OptimizationMetadata, Persona, Platform, Segment, Tone,
    VideoPlan, WorkflowBlueprint,
};

impl fmt::Display for Tone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl fmt::Display for Persona {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl fmt::Display for MonetizationFocus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl fmt::Display for Duration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl fmt::Display for Chapter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.time, self.title)
    }
}

fn write_list(f: &mut fmt::Formatter<'_>, heading: &str, items: &[String]) -> fmt::Result {
    writeln!(f, "#### {heading}")?;
    writeln!(f)?;
    for item in items {
        writeln!(f, "- {item}")?;
    }
    writeln!(f)
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "### {} ({})", self.label, self.timing)?;
        writeln!(f)?;
        writeln!(f, "Objective: {}", self.objective)?;
        writeln!(f)?;

        write_list(f, "Script", &self.script)?;
        write_list(f, "Visual References", &self.visual_references)?;
        write_list(f, "Sound Design", &self.sound_design)?;
        write_list(f, "Editor Notes", &self.editor_notes)
    }
}

impl fmt::Display for OptimizationMetadata {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "## Metadata")?;
        writeln!(f)?;
        writeln!(f, "**Title**: {}", self.title)?;
        writeln!(f)?;
        writeln!(f, "{}", self.description)?;
        writeln!(f)?;
        writeln!(f, "**Tags**: {}", self.tags.join(", "))?;
        writeln!(f)?;

        writeln!(f, "#### Chapters")?;
        writeln!(f)?;
        for chapter in &self.chapters {
            writeln!(f, "- {chapter}")?;
        }
        writeln!(f)?;

        write_list(f, "B-Roll Ideas", &self.b_roll_ideas)?;
        write_list(f, "Thumbnail Concepts", &self.thumbnail_concepts)?;
        write_list(f, "Shorts Angles", &self.shorts_angles)?;
        write_list(f, "Retention Devices", &self.retention_devices)
    }
}

impl fmt::Display for WorkflowBlueprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "## Workflow")?;
        writeln!(f)?;
        write_list(f, "Research Stack", &self.research_stack)?;
        write_list(f, "Automation Stack", &self.automation_stack)?;
        write_list(f, "Production Workflow", &self.production_workflow)?;
        write_list(f, "Publishing Checklist", &self.publishing_checklist)?;
        write_list(f, "Repurposing System", &self.repurposing_system)?;
        write_list(f, "Metrics to Monitor", &self.metrics_to_monitor)
    }
}

impl fmt::Display for VideoPlan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# {}", self.metadata.title)?;
        writeln!(f)?;
        writeln!(f, "**Hook**: {}", self.hook)?;
        writeln!(f)?;
        writeln!(f, "**Promise**: {}", self.promise)?;
        writeln!(f)?;
        writeln!(f, "**Platform directive**: {}", self.platform_directive)?;
        writeln!(f)?;

        writeln!(f, "## Pattern Interrupts")?;
        writeln!(f)?;
        for interrupt in &self.pattern_interrupts {
            writeln!(f, "- {interrupt}")?;
        }
        writeln!(f)?;

        writeln!(f, "## Segments")?;
        writeln!(f)?;
        for segment in &self.segments {
            write!(f, "{segment}")?;
        }

        write!(f, "{}", self.metadata)?;
        write!(f, "{}", self.workflow)?;

        writeln!(f, "## Post-Publish Actions")?;
        writeln!(f)?;
        for action in &self.post_publish_actions {
            writeln!(f, "- {action}")?;
        }

        Ok(())
    }
}
