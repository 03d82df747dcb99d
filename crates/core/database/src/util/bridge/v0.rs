use lostfound_models::v0::*;

impl crate::Match {
    pub fn into_detail(self, lost_report: crate::Report, found_report: crate::Report) -> MatchDetail {
        #[cfg(debug_assertions)]
        assert_eq!(self.lost_report_id, lost_report.id);
        #[cfg(debug_assertions)]
        assert_eq!(self.found_report_id, found_report.id);

        MatchDetail {
            id: self.id,
            lost_report: lost_report.into(),
            found_report: found_report.into(),
            confidence_score: self.confidence_score,
            status: self.status,
            created_at: self.created_at,
            resolved_at: self.resolved_at,
        }
    }
}

impl From<crate::Category> for Category {
    fn from(value: crate::Category) -> Self {
        Category {
            id: value.id,
            name: value.name,
            created_by: value.created_by,
            created_at: value.created_at,
        }
    }
}

impl From<crate::Match> for Match {
    fn from(value: crate::Match) -> Self {
        Match {
            id: value.id,
            lost_report_id: value.lost_report_id,
            found_report_id: value.found_report_id,
            confidence_score: value.confidence_score,
            status: value.status,
            created_at: value.created_at,
            resolved_at: value.resolved_at,
        }
    }
}

impl From<crate::Notification> for Notification {
    fn from(value: crate::Notification) -> Self {
        Notification {
            id: value.id,
            user_id: value.user_id,
            message: value.message,
            related_match_id: value.related_match_id,
            is_read: value.is_read,
            created_at: value.created_at,
        }
    }
}

impl From<crate::Report> for Report {
    fn from(value: crate::Report) -> Self {
        Report {
            id: value.id,
            title: value.title,
            description: value.description,
            category_id: value.category_id,
            report_type: value.report_type,
            status: value.status,
            reporter_id: value.reporter_id,
            location: value.location,
            date_lost_found: value.date_lost_found,
            created_at: value.created_at,
        }
    }
}

impl From<DataEditReport> for crate::PartialReport {
    fn from(value: DataEditReport) -> Self {
        crate::PartialReport {
            title: value.title,
            description: value.description,
            category_id: value.category_id,
            location: value.location,
            date_lost_found: value.date_lost_found,
            status: value.status,
            ..Default::default()
        }
    }
}

impl From<OptionsQueryReports> for crate::ReportQuery {
    fn from(value: OptionsQueryReports) -> Self {
        crate::ReportQuery {
            report_type: value.report_type,
            category_id: value.category,
            status: value.status,
            search: value.q.filter(|q| !q.trim().is_empty()),
        }
    }
}
