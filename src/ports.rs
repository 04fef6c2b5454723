pub mod weather_feed;
