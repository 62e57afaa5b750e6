use chrono::{Duration, Utc};
use media_browse_gateway::{
    DiscoverParams, GatewayError, MovieCategory, TimeWindow, TmdbClient, TrendingKind, TvCategory,
};
use media_browse_models::{Credits, MediaDetails, MediaKind, MediaRecord};

// Provider genre ids for the fixed genre rows.
const GENRE_ACTION: u64 = 28;
const GENRE_COMEDY: u64 = 35;
const GENRE_HORROR: u64 = 27;
const GENRE_ROMANCE: u64 = 10749;
const GENRE_DRAMA: u64 = 18;
const GENRE_SCI_FI_FANTASY: u64 = 10765;
const GENRE_CRIME: u64 = 80;

const RECENT_WINDOW_DAYS: i64 = 30;

/// Each page is one fan-out over independent catalog requests with an
/// all-or-nothing fan-in: any failed leg fails the whole page, and the
/// caller re-issues the entire batch on retry. No partial rendering.

pub struct HomePage {
    pub trending: Vec<MediaRecord>,
    pub popular: Vec<MediaRecord>,
    pub top_rated: Vec<MediaRecord>,
    pub upcoming: Vec<MediaRecord>,
    pub now_playing: Vec<MediaRecord>,
}

impl HomePage {
    pub async fn load(catalog: &TmdbClient) -> Result<Self, GatewayError> {
        let (trending, popular, top_rated, upcoming, now_playing) = tokio::try_join!(
            catalog.trending(TrendingKind::Movie, TimeWindow::Day),
            catalog.movie_category(MovieCategory::Popular),
            catalog.movie_category(MovieCategory::TopRated),
            catalog.movie_category(MovieCategory::Upcoming),
            catalog.movie_category(MovieCategory::NowPlaying),
        )?;
        Ok(Self {
            trending,
            popular,
            top_rated,
            upcoming,
            now_playing,
        })
    }

    pub fn rows(&self) -> Vec<(&'static str, &[MediaRecord])> {
        vec![
            ("Trending Now", &self.trending),
            ("Popular", &self.popular),
            ("Top Rated", &self.top_rated),
            ("Upcoming", &self.upcoming),
            ("Now Playing", &self.now_playing),
        ]
    }
}

pub struct MoviesPage {
    pub popular: Vec<MediaRecord>,
    pub top_rated: Vec<MediaRecord>,
    pub upcoming: Vec<MediaRecord>,
    pub now_playing: Vec<MediaRecord>,
    pub action: Vec<MediaRecord>,
    pub comedy: Vec<MediaRecord>,
    pub horror: Vec<MediaRecord>,
    pub romance: Vec<MediaRecord>,
}

impl MoviesPage {
    pub async fn load(catalog: &TmdbClient) -> Result<Self, GatewayError> {
        let by_genre = |genre_id| {
            DiscoverParams::new()
                .genre(genre_id)
                .sort_by("popularity.desc")
        };
        // Params must outlive the join below.
        let action_params = by_genre(GENRE_ACTION);
        let comedy_params = by_genre(GENRE_COMEDY);
        let horror_params = by_genre(GENRE_HORROR);
        let romance_params = by_genre(GENRE_ROMANCE);
        let (popular, top_rated, upcoming, now_playing, action, comedy, horror, romance) = tokio::try_join!(
            catalog.movie_category(MovieCategory::Popular),
            catalog.movie_category(MovieCategory::TopRated),
            catalog.movie_category(MovieCategory::Upcoming),
            catalog.movie_category(MovieCategory::NowPlaying),
            catalog.discover(MediaKind::Movie, &action_params),
            catalog.discover(MediaKind::Movie, &comedy_params),
            catalog.discover(MediaKind::Movie, &horror_params),
            catalog.discover(MediaKind::Movie, &romance_params),
        )?;
        Ok(Self {
            popular,
            top_rated,
            upcoming,
            now_playing,
            action,
            comedy,
            horror,
            romance,
        })
    }

    pub fn rows(&self) -> Vec<(&'static str, &[MediaRecord])> {
        vec![
            ("Popular", &self.popular),
            ("Top Rated", &self.top_rated),
            ("Upcoming", &self.upcoming),
            ("Now Playing", &self.now_playing),
            ("Action", &self.action),
            ("Comedy", &self.comedy),
            ("Horror", &self.horror),
            ("Romance", &self.romance),
        ]
    }
}

pub struct TvPage {
    pub popular: Vec<MediaRecord>,
    pub top_rated: Vec<MediaRecord>,
    pub on_the_air: Vec<MediaRecord>,
    pub airing_today: Vec<MediaRecord>,
    pub drama: Vec<MediaRecord>,
    pub comedy: Vec<MediaRecord>,
    pub sci_fi: Vec<MediaRecord>,
    pub crime: Vec<MediaRecord>,
}

impl TvPage {
    pub async fn load(catalog: &TmdbClient) -> Result<Self, GatewayError> {
        let by_genre = |genre_id| {
            DiscoverParams::new()
                .genre(genre_id)
                .sort_by("popularity.desc")
        };
        // Params must outlive the join below.
        let drama_params = by_genre(GENRE_DRAMA);
        let comedy_params = by_genre(GENRE_COMEDY);
        let sci_fi_params = by_genre(GENRE_SCI_FI_FANTASY);
        let crime_params = by_genre(GENRE_CRIME);
        let (popular, top_rated, on_the_air, airing_today, drama, comedy, sci_fi, crime) = tokio::try_join!(
            catalog.tv_category(TvCategory::Popular),
            catalog.tv_category(TvCategory::TopRated),
            catalog.tv_category(TvCategory::OnTheAir),
            catalog.tv_category(TvCategory::AiringToday),
            catalog.discover(MediaKind::Tv, &drama_params),
            catalog.discover(MediaKind::Tv, &comedy_params),
            catalog.discover(MediaKind::Tv, &sci_fi_params),
            catalog.discover(MediaKind::Tv, &crime_params),
        )?;
        Ok(Self {
            popular,
            top_rated,
            on_the_air,
            airing_today,
            drama,
            comedy,
            sci_fi,
            crime,
        })
    }

    pub fn rows(&self) -> Vec<(&'static str, &[MediaRecord])> {
        vec![
            ("Popular", &self.popular),
            ("Top Rated", &self.top_rated),
            ("On The Air", &self.on_the_air),
            ("Airing Today", &self.airing_today),
            ("Drama", &self.drama),
            ("Comedy", &self.comedy),
            ("Sci-Fi & Fantasy", &self.sci_fi),
            ("Crime", &self.crime),
        ]
    }
}

pub struct RecentPage {
    pub trending_today: Vec<MediaRecord>,
    pub trending_week: Vec<MediaRecord>,
    pub recent_movies: Vec<MediaRecord>,
    pub recent_shows: Vec<MediaRecord>,
    pub new_releases: Vec<MediaRecord>,
}

impl RecentPage {
    pub async fn load(catalog: &TmdbClient) -> Result<Self, GatewayError> {
        let cutoff = (Utc::now() - Duration::days(RECENT_WINDOW_DAYS)).date_naive();
        let recent_movie_params = DiscoverParams::new()
            .released_after(cutoff)
            .sort_by("primary_release_date.desc");
        let recent_show_params = DiscoverParams::new()
            .released_after(cutoff)
            .sort_by("first_air_date.desc");

        let (trending_today, trending_week, recent_movies, recent_shows, new_releases) = tokio::try_join!(
            catalog.trending(TrendingKind::All, TimeWindow::Day),
            catalog.trending(TrendingKind::All, TimeWindow::Week),
            catalog.discover(MediaKind::Movie, &recent_movie_params),
            catalog.discover(MediaKind::Tv, &recent_show_params),
            catalog.movie_category(MovieCategory::NowPlaying),
        )?;
        Ok(Self {
            trending_today,
            trending_week,
            recent_movies,
            recent_shows,
            new_releases,
        })
    }

    pub fn rows(&self) -> Vec<(&'static str, &[MediaRecord])> {
        vec![
            ("Trending Today", &self.trending_today),
            ("Trending This Week", &self.trending_week),
            ("Recent Movies", &self.recent_movies),
            ("Recent TV Shows", &self.recent_shows),
            ("New Releases", &self.new_releases),
        ]
    }
}

/// Detail view for one title: details and credits fetched together.
pub struct TitlePage {
    pub kind: MediaKind,
    pub details: MediaDetails,
    pub credits: Credits,
}

impl TitlePage {
    pub async fn load(catalog: &TmdbClient, kind: MediaKind, id: u64) -> Result<Self, GatewayError> {
        let (details, credits) =
            tokio::try_join!(catalog.details(kind, id), catalog.credits(kind, id))?;
        Ok(Self {
            kind,
            details,
            credits,
        })
    }
}
