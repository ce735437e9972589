use anyhow::Result;
use chrono::{DateTime, Utc};
use log::info;
use shared::{BookTourRequest, BookTourResponse, BookingRecord, BookingStatus, Tour};

use crate::catalog::POPULAR_TOURS;
use crate::ident;

/// Prefix of every generated tour booking identifier.
pub const TOUR_ID_PREFIX: &str = "NE-";

/// Service for browsing the tour catalog and booking tours.
///
/// Bookings form an append-only session ledger: records are never
/// mutated or removed, and display order is booking order.
#[derive(Debug, Clone, Default)]
pub struct TourService {
    bookings: Vec<BookingRecord>,
}

impl TourService {
    pub fn new() -> Self {
        Self::default()
    }

    /// Tours available for booking.
    pub fn popular_tours(&self) -> &'static [Tour] {
        &POPULAR_TOURS
    }

    /// Book a tour from the catalog.
    pub fn book_tour(&mut self, request: BookTourRequest) -> Result<BookTourResponse> {
        let now = Utc::now();
        self.book_tour_at(request, now, rand::random::<f64>)
    }

    /// Book a tour with an explicit clock and random source.
    pub fn book_tour_at<F>(
        &mut self,
        request: BookTourRequest,
        now: DateTime<Utc>,
        random: F,
    ) -> Result<BookTourResponse>
    where
        F: FnMut() -> f64,
    {
        info!("Booking tour: {}", request.tour_id);

        let tour = POPULAR_TOURS
            .iter()
            .find(|tour| tour.id == request.tour_id)
            .cloned()
            .ok_or_else(|| anyhow::anyhow!("Tour not found: {}", request.tour_id))?;

        let tour_id = ident::generate_id(
            TOUR_ID_PREFIX,
            now.timestamp_millis().max(0) as u64,
            random,
        );

        let booking = BookingRecord {
            tour_id: tour_id.clone(),
            tour: tour.clone(),
            booked_at: now,
            status: BookingStatus::Confirmed,
        };
        self.bookings.push(booking.clone());

        info!("Booked tour '{}' with ID: {}", tour.name, tour_id);

        Ok(BookTourResponse {
            booking,
            success_message: format!(
                "Tour ID: {}\n\nYour {} tour has been confirmed. Your unique tour ID has been generated for tracking and safety purposes.",
                tour_id, tour.name
            ),
        })
    }

    /// Bookings made this session, in booking order.
    pub fn active_bookings(&self) -> &[BookingRecord] {
        &self.bookings
    }

    pub fn booking_count(&self) -> usize {
        self.bookings.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn at(millis: i64) -> DateTime<Utc> {
        Utc.timestamp_millis_opt(millis).single().unwrap()
    }

    #[test]
    fn test_book_tour_appends_confirmed_record() {
        let mut service = TourService::new();
        let response = service
            .book_tour_at(BookTourRequest { tour_id: 1 }, at(1_700_000_000_000), || 0.25)
            .unwrap();

        assert_eq!(service.booking_count(), 1);
        let booking = &service.active_bookings()[0];
        assert_eq!(booking.status, BookingStatus::Confirmed);
        assert_eq!(booking.tour.name, "Kaziranga National Park");
        assert!(booking.tour_id.starts_with(TOUR_ID_PREFIX));
        assert!(booking.tour_id.len() > TOUR_ID_PREFIX.len());
        assert!(response.success_message.contains(&booking.tour_id));
    }

    #[test]
    fn test_second_booking_preserves_first() {
        let mut service = TourService::new();
        service
            .book_tour_at(BookTourRequest { tour_id: 1 }, at(1_700_000_000_000), || 0.25)
            .unwrap();
        let first = service.active_bookings()[0].clone();

        service
            .book_tour_at(BookTourRequest { tour_id: 3 }, at(1_700_000_100_000), || 0.75)
            .unwrap();

        assert_eq!(service.booking_count(), 2);
        assert_eq!(service.active_bookings()[0], first);
        assert_eq!(service.active_bookings()[1].tour.name, "Living Root Bridges");
    }

    #[test]
    fn test_booking_ids_differ_across_timestamps() {
        let mut service = TourService::new();
        let a = service
            .book_tour_at(BookTourRequest { tour_id: 2 }, at(1_700_000_000_000), || 0.5)
            .unwrap();
        let b = service
            .book_tour_at(BookTourRequest { tour_id: 2 }, at(1_700_000_000_001), || 0.5)
            .unwrap();
        assert_ne!(a.booking.tour_id, b.booking.tour_id);
    }

    #[test]
    fn test_book_unknown_tour_fails() {
        let mut service = TourService::new();
        let result = service.book_tour(BookTourRequest { tour_id: 99 });
        assert!(result.is_err());
        assert_eq!(service.booking_count(), 0);
    }

    #[test]
    fn test_catalog_is_exposed() {
        let service = TourService::new();
        assert_eq!(service.popular_tours().len(), 4);
    }
}
