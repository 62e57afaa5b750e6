use std::fmt;
use std::str::FromStr;

/// Curated movie list endpoints (`/movie/{category}`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MovieCategory {
    Popular,
    TopRated,
    NowPlaying,
    Upcoming,
}

impl MovieCategory {
    pub const ALL: [MovieCategory; 4] = [
        MovieCategory::Popular,
        MovieCategory::TopRated,
        MovieCategory::NowPlaying,
        MovieCategory::Upcoming,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            MovieCategory::Popular => "popular",
            MovieCategory::TopRated => "top_rated",
            MovieCategory::NowPlaying => "now_playing",
            MovieCategory::Upcoming => "upcoming",
        }
    }
}

impl fmt::Display for MovieCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MovieCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "popular" => Ok(MovieCategory::Popular),
            "top_rated" => Ok(MovieCategory::TopRated),
            "now_playing" => Ok(MovieCategory::NowPlaying),
            "upcoming" => Ok(MovieCategory::Upcoming),
            _ => Err(format!(
                "Invalid movie category: {}. Use popular, top_rated, now_playing or upcoming",
                s
            )),
        }
    }
}

/// Curated TV list endpoints (`/tv/{category}`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TvCategory {
    Popular,
    TopRated,
    OnTheAir,
    AiringToday,
}

impl TvCategory {
    pub const ALL: [TvCategory; 4] = [
        TvCategory::Popular,
        TvCategory::TopRated,
        TvCategory::OnTheAir,
        TvCategory::AiringToday,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            TvCategory::Popular => "popular",
            TvCategory::TopRated => "top_rated",
            TvCategory::OnTheAir => "on_the_air",
            TvCategory::AiringToday => "airing_today",
        }
    }
}

impl fmt::Display for TvCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TvCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "popular" => Ok(TvCategory::Popular),
            "top_rated" => Ok(TvCategory::TopRated),
            "on_the_air" => Ok(TvCategory::OnTheAir),
            "airing_today" => Ok(TvCategory::AiringToday),
            _ => Err(format!(
                "Invalid tv category: {}. Use popular, top_rated, on_the_air or airing_today",
                s
            )),
        }
    }
}

/// Namespace selector for `/trending/{kind}/{window}`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TrendingKind {
    #[default]
    All,
    Movie,
    Tv,
}

impl TrendingKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            TrendingKind::All => "all",
            TrendingKind::Movie => "movie",
            TrendingKind::Tv => "tv",
        }
    }
}

impl FromStr for TrendingKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "all" => Ok(TrendingKind::All),
            "movie" => Ok(TrendingKind::Movie),
            "tv" => Ok(TrendingKind::Tv),
            _ => Err(format!("Invalid trending kind: {}. Use all, movie or tv", s)),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TimeWindow {
    #[default]
    Day,
    Week,
}

impl TimeWindow {
    pub fn as_str(&self) -> &'static str {
        match self {
            TimeWindow::Day => "day",
            TimeWindow::Week => "week",
        }
    }
}

impl FromStr for TimeWindow {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "day" => Ok(TimeWindow::Day),
            "week" => Ok(TimeWindow::Week),
            _ => Err(format!("Invalid time window: {}. Use day or week", s)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_categories_round_trip_wire_names() {
        for category in MovieCategory::ALL {
            assert_eq!(category.as_str().parse::<MovieCategory>().unwrap(), category);
        }
        for category in TvCategory::ALL {
            assert_eq!(category.as_str().parse::<TvCategory>().unwrap(), category);
        }
    }

    #[test]
    fn test_trending_parts_parse() {
        assert_eq!("all".parse::<TrendingKind>().unwrap(), TrendingKind::All);
        assert_eq!("week".parse::<TimeWindow>().unwrap(), TimeWindow::Week);
        assert!("month".parse::<TimeWindow>().is_err());
    }
}
