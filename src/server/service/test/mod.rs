mod carousel;
